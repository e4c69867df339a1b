//! Loading route tables from disk.

use trie_router::config::{load_config, ConfigError, ValidationError};

mod common;

#[test]
fn test_load_and_dispatch() {
    let path = common::write_temp_config(
        "load",
        r#"
root_handler = "root handler"
not_found_handler = "not found handler"

[[routes]]
path = "/home/about"
handler = "about handler"

[[routes]]
path = "/blog/2019-01-15/my-awesome-blog-post"
handler = "post handler"
"#,
    );

    let config = load_config(&path).unwrap();
    common::cleanup(&path);

    let dispatcher = config.build_dispatcher();
    assert_eq!(dispatcher.resolve("/home/about/"), "about handler");
    assert_eq!(
        dispatcher.resolve("/blog/2019-01-15/my-awesome-blog-post"),
        "post handler"
    );
    assert_eq!(dispatcher.resolve("/blog"), "not found handler");
    assert_eq!(dispatcher.resolve("/"), "root handler");

    let paths: Vec<String> = dispatcher.routes().into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        paths,
        ["/", "/blog/2019-01-15/my-awesome-blog-post", "/home/about"]
    );
}

#[test]
fn test_invalid_table_reports_every_error() {
    let path = common::write_temp_config(
        "invalid",
        r#"
not_found_handler = ""

[[routes]]
path = ""
handler = "nowhere"

[[routes]]
path = "/empty"
handler = ""
"#,
    );

    let err = load_config(&path).unwrap_err();
    common::cleanup(&path);

    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(
                errors,
                vec![
                    ValidationError::BlankNotFoundHandler,
                    ValidationError::EmptyPath {
                        index: 0,
                        handler: "nowhere".into()
                    },
                    ValidationError::BlankHandler {
                        path: "/empty".into()
                    },
                ]
            );
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_malformed_toml() {
    let path = common::write_temp_config("malformed", "[[routes]]\npath = \"/a\"\n");
    let err = load_config(&path).unwrap_err();
    common::cleanup(&path);

    // `handler` is required on every route.
    assert!(matches!(err, ConfigError::Parse(_)));
}
