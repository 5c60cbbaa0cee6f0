use tabula::{
    asc, desc,
    formula::{and, eq, gt},
    Base, Error, Projection,
};
use tabula_core::driver::RawRecord;
use tests::{fixtures, MockDriver};

use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

#[tokio::test]
async fn decodes_every_record_in_order() {
    let users = tabula::table(
        "Users",
        [
            ("name", tabula::text("Full Name")),
            ("age", tabula::number("Years Old")),
        ],
    );

    let driver = MockDriver::new([
        RawRecord::new("r1")
            .with("Full Name", "Alice")
            .with("Years Old", 30),
        RawRecord::new("r2").with("Full Name", "Bob"),
    ]);
    let base = Base::new(driver);

    let rows = base.select(None).from(&users).exec().await.unwrap();

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].id(), "r1");
    assert_eq!(rows[0].get("name"), Some(&json!("Alice")));
    assert_eq!(rows[0].get("age"), Some(&json!(30)));

    assert_eq!(rows[1].id(), "r2");
    assert_eq!(rows[1].get("name"), Some(&json!("Bob")));
    assert_eq!(rows[1].get("age"), None);
    assert!(rows[1].contains("age"));

    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            { "id": "r1", "name": "Alice", "age": 30 },
            { "id": "r2", "name": "Bob", "age": null },
        ])
    );
}

#[tokio::test]
async fn unprojected_query_sends_no_field_list() {
    let driver = MockDriver::new([fixtures::alice()]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let rows = base.select(None).from(&users).exec().await.unwrap();

    // Rows still carry every field of the table.
    let keys: Vec<_> = rows[0].fields().map(|(name, _)| name).collect();
    assert_eq!(keys, ["name", "age", "active", "avatar"]);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].table, "Users");
    assert_eq!(log[0].options.fields, None);
    assert_eq!(serde_json::to_value(&log[0].options).unwrap(), json!({}));
}

#[tokio::test]
async fn empty_projection_sends_no_field_list() {
    let driver = MockDriver::new([fixtures::alice()]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let rows = base
        .select(Some(Projection::new()))
        .from(&users)
        .exec()
        .await
        .unwrap();

    assert_eq!(rows[0].fields().len(), 0);
    assert_eq!(
        serde_json::to_value(&rows[0]).unwrap(),
        json!({ "id": "rec1" })
    );

    let log = log.lock().unwrap();
    assert_eq!(log[0].options.fields, None);
}

#[tokio::test]
async fn projection_restricts_keys_and_fields_option() {
    let driver = MockDriver::new([fixtures::alice(), fixtures::bob()]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let projection = users.project(["name"]).unwrap();
    let rows = base.select(Some(projection)).from(&users).exec().await.unwrap();

    for row in &rows {
        let keys: Vec<_> = row.fields().map(|(name, _)| name).collect();
        assert_eq!(keys, ["name"]);
        assert!(!row.contains("age"));
        assert_eq!(row.get("age"), None);
    }

    assert_eq!(
        serde_json::to_value(&rows[0]).unwrap(),
        json!({ "id": "rec1", "name": "Alice" })
    );

    let log = log.lock().unwrap();
    assert_eq!(log[0].options.fields, Some(vec!["Full Name".to_string()]));
}

#[tokio::test]
async fn projection_built_by_hand() {
    let users = fixtures::users();
    let name = users.field("name").unwrap();

    let driver = MockDriver::new([fixtures::alice()]);
    let base = Base::new(driver);

    let projection = Projection::new().field("display", name);
    let rows = base.select(Some(projection)).from(&users).exec().await.unwrap();

    assert_eq!(rows[0].text("display").unwrap(), Some("Alice"));
    assert!(!rows[0].contains("name"));
}

#[tokio::test]
async fn configured_options_reach_the_driver() {
    let driver = MockDriver::new([]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let age = users.field("age").unwrap();
    let name = users.field("name").unwrap();

    base.select(None)
        .from(&users)
        .filter(and([gt(age, 21), eq(name, "Bob")]))
        .order_by([desc(age)])
        .view("Grid view")
        .exec()
        .await
        .unwrap();

    let log = log.lock().unwrap();
    let options = serde_json::to_value(&log[0].options).unwrap();
    assert_eq!(
        options,
        json!({
            "filterByFormula": "AND(({Years Old} > 21), ({Full Name} = 'Bob'))",
            "sort": [{ "field": "Years Old", "direction": "desc" }],
            "view": "Grid view",
        })
    );
}

#[tokio::test]
async fn second_filter_replaces_first_and_sorts_append() {
    let driver = MockDriver::new([]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let age = users.field("age").unwrap();
    let name = users.field("name").unwrap();

    base.select(None)
        .from(&users)
        .filter(gt(age, 21))
        .filter(eq(name, "Bob"))
        .order_by([asc(name)])
        .order_by([desc(age)])
        .exec()
        .await
        .unwrap();

    let log = log.lock().unwrap();
    let options = &log[0].options;
    assert_eq!(
        options.filter_by_formula.as_deref(),
        Some("({Full Name} = 'Bob')")
    );

    let sort: Vec<_> = options
        .sort
        .iter()
        .flatten()
        .map(|sort| (sort.field.as_str(), sort.direction))
        .collect();
    assert_eq!(
        sort,
        [
            ("Full Name", tabula::stmt::Direction::Asc),
            ("Years Old", tabula::stmt::Direction::Desc),
        ]
    );
}

#[tokio::test]
async fn unset_options_are_left_out() {
    let driver = MockDriver::new([]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let projection = users.project(["name", "age"]).unwrap();
    base.select(Some(projection))
        .from(&users)
        .exec()
        .await
        .unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        serde_json::to_value(&log[0].options).unwrap(),
        json!({ "fields": ["Full Name", "Years Old"] })
    );
}

#[tokio::test]
async fn hand_written_formula_is_sent_verbatim() {
    let driver = MockDriver::new([]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    base.select(None)
        .from(&users)
        .filter("NOT({Is Active})")
        .exec()
        .await
        .unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        log[0].options.filter_by_formula.as_deref(),
        Some("NOT({Is Active})")
    );
}

#[tokio::test]
async fn executing_twice_yields_equal_rows() {
    let driver = MockDriver::new([fixtures::alice(), fixtures::bob()]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let age = users.field("age").unwrap();
    let query = base
        .select(None)
        .from(&users)
        .filter(gt(age, 21))
        .order_by([asc(age)]);

    let first = query.exec().await.unwrap();
    let second = query.exec().await.unwrap();

    assert_eq!(first, second);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], log[1]);
}

#[tokio::test]
async fn build_then_execute() {
    let driver = MockDriver::new([fixtures::alice()]);
    let log = driver.log_handle();
    let base = Base::new(driver);

    let users = fixtures::users();
    let descriptor = base.select(None).from(&users).view("Everyone").build();

    // Building alone sends nothing.
    assert!(log.lock().unwrap().is_empty());

    let rows = base.execute(&descriptor).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].boolean("active").unwrap(), Some(true));

    let log = log.lock().unwrap();
    assert_eq!(log[0], descriptor.to_operation());
}

#[tokio::test]
async fn driver_errors_are_returned_unchanged() {
    let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let driver = MockDriver::failing(Error::driver(io_err));
    let base = Base::new(driver);

    let users = fixtures::users();
    let err = base.select(None).from(&users).exec().await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "connection refused");
}

#[tokio::test]
async fn exec_as_deserializes_rows() {
    #[derive(Debug, PartialEq, Deserialize)]
    struct User {
        id: String,
        name: String,
        age: Option<f64>,
    }

    let driver = MockDriver::new([fixtures::alice(), fixtures::bob()]);
    let base = Base::new(driver);

    let users = fixtures::users();
    let projection = users.project(["name", "age"]).unwrap();
    let rows: Vec<User> = base
        .select(Some(projection))
        .from(&users)
        .exec_as()
        .await
        .unwrap();

    assert_eq!(
        rows,
        [
            User {
                id: "rec1".to_string(),
                name: "Alice".to_string(),
                age: Some(30.0),
            },
            User {
                id: "rec2".to_string(),
                name: "Bob".to_string(),
                age: None,
            },
        ]
    );
}

#[tokio::test]
async fn exec_as_reports_shape_mismatch() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Strict {
        id: String,
        age: f64,
    }

    let driver = MockDriver::new([fixtures::bob()]);
    let base = Base::new(driver);

    let users = fixtures::users();
    let result = base.select(None).from(&users).exec_as::<Strict>().await;

    assert!(result.is_err());
}
