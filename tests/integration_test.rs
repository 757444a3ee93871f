use postman2playwright::loader::load_collection;
use postman2playwright::models::collection::Item;
use std::path::Path;

#[test]
fn test_load_collection_fixture() {
    let path = Path::new("tests/fixtures/collection.json");
    let result = load_collection(path);

    assert!(result.is_ok(), "Failed to load collection fixture");

    let collection = result.unwrap();
    assert_eq!(collection.info.unwrap().name, "Shop API");
    assert_eq!(collection.item.len(), 3);

    let names: Vec<&str> = collection.item.iter().map(Item::name).collect();
    assert_eq!(names, vec!["Auth", "Users", "Health check"]);
}

#[test]
fn test_fixture_folder_contents() {
    let collection = load_collection("tests/fixtures/collection.json").unwrap();

    let Item::Folder(auth) = &collection.item[0] else {
        panic!("Auth should be a folder");
    };
    assert_eq!(auth.item.len(), 3);

    let Item::Request(login) = &auth.item[0] else {
        panic!("Login should be a request");
    };
    assert_eq!(login.endpoint(), Some(("POST", "{{BASE_URL}}/login")));
    assert!(login.test_script().unwrap().contains("pm.response.to.have.status(200);"));
    assert!(login.prerequest_script().is_none());
}

#[test]
fn test_fixture_request_without_method() {
    let collection = load_collection("tests/fixtures/collection.json").unwrap();

    let Item::Folder(users) = &collection.item[1] else {
        panic!("Users should be a folder");
    };
    let Item::Request(broken) = &users.item[2] else {
        panic!("Broken should be a request");
    };
    assert!(broken.endpoint().is_none());
}
