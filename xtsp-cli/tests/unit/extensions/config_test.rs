use super::*;

fn read_config_str(content: &str) -> Result<Config, GenericError> {
    read_config(BufReader::new(content.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let config = read_config_str(r#"{"evaluation": {"rounding": false, "norm": 1}, "logging": {"enabled": true}}"#)
        .expect("cannot read config");

    assert_eq!(
        config.to_check_options(),
        Ok(CheckOptions { is_rounded: false, norm: NormSelection::Fixed(NormOrder::MANHATTAN) })
    );
    assert!(config.is_logging_enabled());
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config_str("{}").expect("cannot read config");

    assert_eq!(config.to_check_options(), Ok(CheckOptions::default()));
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_read_named_norms() {
    let cases = vec![
        (r#""inf""#, NormSelection::Fixed(NormOrder::CHEBYSHEV)),
        (r#""auto""#, NormSelection::Auto),
        (r#""AUTO""#, NormSelection::Auto),
        ("3", NormSelection::Fixed(NormOrder::new(3.).expect("invalid norm"))),
        ("2.5", NormSelection::Fixed(NormOrder::new(2.5).expect("invalid norm"))),
    ];

    for (norm, expected) in cases {
        let config = read_config_str(format!(r#"{{"evaluation": {{"norm": {norm}}}}}"#).as_str())
            .expect("cannot read config");

        let options = config.to_check_options().expect("cannot get options");

        assert_eq!(options.norm, expected, "norm: {norm}");
        assert!(options.is_rounded);
    }
}

#[test]
fn can_reject_invalid_norms() {
    for norm in ["0.5", r#""manhattan""#, "-1"] {
        let config = read_config_str(format!(r#"{{"evaluation": {{"norm": {norm}}}}}"#).as_str())
            .expect("cannot read config");

        assert!(config.to_check_options().is_err(), "norm: {norm}");
    }
}

#[test]
fn can_fail_on_malformed_json() {
    let result = read_config_str(r#"{"evaluation": {"rounding": "yes"}}"#);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot deserialize config")));
}

#[test]
fn can_read_config_from_data_file() {
    let file = std::fs::File::open("../data/config/config.auto.json").expect("cannot open config");

    let config = read_config(BufReader::new(file)).expect("cannot read config");

    assert_eq!(config.to_check_options().map(|options| options.norm), Ok(NormSelection::Auto));
}
