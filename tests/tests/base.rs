use tabula::{Base, Schema};
use tests::{fixtures, MockDriver};

#[test]
fn builder_records_base_id() {
    let base = Base::builder()
        .base_id("appXYZ")
        .build(MockDriver::new([]))
        .unwrap();

    assert_eq!(base.base_id(), Some("appXYZ"));
}

#[test]
fn builder_rejects_blank_base_id() {
    let err = Base::builder()
        .base_id("  ")
        .build(MockDriver::new([]))
        .unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn new_base_has_no_id() {
    let base = Base::new(MockDriver::new([]));
    assert_eq!(base.base_id(), None);
}

#[tokio::test]
async fn clones_share_the_driver() {
    let driver = MockDriver::new([fixtures::alice()]);
    let log = driver.log_handle();
    let base = Base::new(driver);
    let other = base.clone();

    let users = fixtures::users();
    base.select(None).from(&users).exec().await.unwrap();
    other.select(None).from(&users).exec().await.unwrap();

    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn query_tables_from_schema() {
    let schema = Schema::from_tables([fixtures::users()]);
    let users = schema.table("Users").unwrap();

    let base = Base::new(MockDriver::new([fixtures::bob()]));
    let rows = base.select(None).from(users).exec().await.unwrap();

    assert_eq!(rows[0].text("name").unwrap(), Some("Bob"));
    assert_eq!(rows[0].number("age").unwrap(), None);
}

#[test]
fn unknown_projected_field_is_rejected() {
    let err = fixtures::users().project(["nickname"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid statement: unknown field `nickname` in table `Users`"
    );
}
