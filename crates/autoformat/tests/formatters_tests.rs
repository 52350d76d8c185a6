use autoformat::{
    format_by_name, format_csv, format_email, format_url, registry, AutoFormatConfig,
    AutoFormatField, Format, FormatErrorKind, Formatted, RegistryError,
};

#[test]
fn url_without_protocol_gets_https() {
    assert_eq!(format_url("example.com").unwrap(), "https://example.com");
    assert_eq!(
        format_url("www.example.co.uk/about?lang=en").unwrap(),
        "https://www.example.co.uk/about?lang=en"
    );
}

#[test]
fn url_with_protocol_is_unchanged() {
    for input in [
        "http://example.com",
        "https://example.com:443/",
        "git://admin@repo.example.dev:9418/project",
    ] {
        assert_eq!(format_url(input).unwrap(), input);
    }
}

#[test]
fn url_rejection_keeps_original_value() {
    let err = format_url("not a url").unwrap_err();
    assert_eq!(err.value, "not a url");
    assert_eq!(err.error, FormatErrorKind::InvalidUrl);
    assert_eq!(err.message(), "Invalid URL");
}

#[test]
fn url_requires_two_char_tld() {
    assert!(format_url("a.b").is_err());
    assert!(format_url("a.bc").is_ok());
}

#[test]
fn url_port_must_have_two_to_five_digits() {
    assert!(format_url("example.com:8").is_err());
    assert!(format_url("example.com:80").is_ok());
    assert!(format_url("example.com:65535").is_ok());
    assert!(format_url("example.com:655350").is_err());
}

#[test]
fn email_examples() {
    assert_eq!(format_email("a@b").unwrap(), "a@b");

    let err = format_email("noat").unwrap_err();
    assert_eq!(err.message(), "Invalid Email");

    let err = format_email("a@b@c").unwrap_err();
    assert_eq!(err.value, "a@b@c");
}

#[test]
fn csv_examples() {
    assert_eq!(format_csv("a, b  c,d").unwrap(), vec!["a", "b", "c", "d"]);
    assert!(format_csv("").unwrap().is_empty());
}

#[test]
fn registry_exposes_all_three_formatters() {
    let reg = registry();
    assert!((reg.url)("example.com").is_ok());
    assert!((reg.email)("x@y").is_ok());
    assert!((reg.csv)("anything at all").is_ok());

    for format in Format::ALL {
        assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
    }
}

#[test]
fn name_dispatch_reports_unknown_formats() {
    assert_eq!(
        format_by_name("csv", "x y").unwrap(),
        Formatted::List(vec!["x".into(), "y".into()])
    );
    assert_eq!(
        format_by_name("phone", "555-0100").unwrap_err(),
        RegistryError::UnknownFormat("phone".into())
    );
}

#[test]
fn field_and_config_work_together() {
    let config = AutoFormatConfig::from_toml_str("[fields]\nsite = \"url\"\n").unwrap();
    let format = config.format_for("site").unwrap();

    let mut field = AutoFormatField::new("site", format);
    field.input("hello");
    assert_eq!(field.error_message().as_deref(), Some("Invalid URL"));
    assert_eq!(field.display(), "hello");

    field.input("hello.world");
    assert_eq!(field.display(), "https://hello.world");
}
