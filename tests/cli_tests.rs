// CLI library tests
//
// These exercise the functions behind the `treepath` binary with documents
// held in memory, plus file loading through a temporary directory.

use std::fs;

use treepath::cli::{
    CountOptions, GetOptions, GetResult, InputFormat, SearchOptions, execute_count, execute_get,
    execute_search, load_input, parse_document,
};
use treepath::{Error, PathSyntax};

const SERVICE_JSON: &str = r#"{
    "service": {
        "component": [
            {"name": "auth", "port": 8080},
            {"name": "db", "port": 5432}
        ],
        "enabled": true,
        "owner": null
    },
    "version": "1.0.0"
}"#;

const SERVICE_YAML: &str = "
service:
  component:
    - name: auth
      port: 8080
    - name: db
      port: 5432
  enabled: true
  owner: ~
version: 1.0.0
";

fn get(path: &str, input: &str) -> GetOptions {
    GetOptions {
        path: path.to_string(),
        input: Some(input.to_string()),
        ..Default::default()
    }
}

// ============================================================================
// get
// ============================================================================

#[test]
fn test_get_scalar() {
    for input in [SERVICE_JSON, SERVICE_YAML] {
        let result = execute_get(&get("service.component[1].port", input)).unwrap();
        assert_eq!(result, GetResult::Text("5432".to_string()));

        let result = execute_get(&get("version", input)).unwrap();
        assert_eq!(result, GetResult::Text("1.0.0".to_string()));
    }
}

#[test]
fn test_get_container_as_json() {
    let result = execute_get(&get("service.component[0]", SERVICE_JSON)).unwrap();
    assert_eq!(
        result,
        GetResult::Json(serde_json::json!({"name": "auth", "port": 8080}))
    );
    assert_eq!(
        result.render(false).unwrap(),
        serde_json::to_string(&serde_json::json!({"name": "auth", "port": 8080})).unwrap()
    );
    assert!(result.render(true).unwrap().contains('\n'));
}

#[test]
fn test_get_null_as_json() {
    let result = execute_get(&get("service.owner", SERVICE_YAML)).unwrap();
    assert_eq!(result, GetResult::Json(serde_json::Value::Null));
    assert_eq!(result.render(false).unwrap(), "null");
}

#[test]
fn test_get_canonical() {
    let mut options = get("service.component.[1]..name", SERVICE_JSON);
    options.canonical = true;
    let result = execute_get(&options).unwrap();
    assert_eq!(result, GetResult::Text("service.component[1].name".to_string()));
}

#[test]
fn test_get_missing_path() {
    let err = execute_get(&get("service.component[10].name", SERVICE_JSON)).unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
    assert_eq!(err.to_string(), "path not found: service.component[10].name");
}

#[test]
fn test_get_custom_syntax() {
    let mut options = get("service/component<0>/name", SERVICE_JSON);
    options.syntax = PathSyntax::new('/', '<', '>').unwrap();
    let result = execute_get(&options).unwrap();
    assert_eq!(result, GetResult::Text("auth".to_string()));
}

#[test]
fn test_get_without_input() {
    let options = GetOptions {
        path: "version".to_string(),
        ..Default::default()
    };
    assert!(matches!(execute_get(&options), Err(Error::NoInput)));
}

#[test]
fn test_get_malformed_document() {
    let mut options = get("a", "{\"a\": ");
    options.format = InputFormat::Json;
    assert!(matches!(execute_get(&options), Err(Error::Json(_))));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_sorted() {
    let options = SearchOptions {
        pattern: "^(name|port)$".to_string(),
        input: Some(SERVICE_YAML.to_string()),
        ..Default::default()
    };
    let paths = execute_search(&options).unwrap();
    assert_eq!(
        paths,
        [
            ".service.component[0].name",
            ".service.component[0].port",
            ".service.component[1].name",
            ".service.component[1].port",
        ]
    );
}

#[test]
fn test_search_invalid_pattern() {
    let options = SearchOptions {
        pattern: "(".to_string(),
        input: Some(SERVICE_JSON.to_string()),
        ..Default::default()
    };
    assert!(matches!(
        execute_search(&options),
        Err(Error::InvalidPattern(_))
    ));
}

// ============================================================================
// count
// ============================================================================

#[test]
fn test_count() {
    for input in [SERVICE_JSON, SERVICE_YAML] {
        let options = CountOptions {
            input: Some(input.to_string()),
            format: InputFormat::Auto,
        };
        // component list, enabled, owner, version
        assert_eq!(execute_count(&options).unwrap(), 4);
    }
}

// ============================================================================
// input handling
// ============================================================================

#[test]
fn test_load_input_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("service.yaml");
    fs::write(&path, SERVICE_YAML).unwrap();

    let text = load_input(&path).unwrap();
    let doc = parse_document(&text, InputFormat::Yaml).unwrap();
    assert_eq!(treepath::value_as_string(&doc, "service.component[0].name"), "auth");
}

#[test]
fn test_load_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_input(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_input_format_parse() {
    assert_eq!(InputFormat::parse("auto").unwrap(), InputFormat::Auto);
    assert_eq!(InputFormat::parse("Json").unwrap(), InputFormat::Json);
    assert_eq!(InputFormat::parse("yml").unwrap(), InputFormat::Yaml);
    assert!(InputFormat::parse("").is_err());
}
