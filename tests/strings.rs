use datetime_extensions::localization::Bundle;
use datetime_extensions::utils::strings::*;

#[test]
fn test_capitalizing_first_letter() {
    assert_eq!("monday".capitalizing_first_letter(), "Monday");
    assert_eq!("OCTOBER".capitalizing_first_letter(), "October");
    assert_eq!("é già".capitalizing_first_letter(), "É già");
    assert_eq!("".capitalizing_first_letter(), "");
    assert_eq!("x".capitalizing_first_letter(), "X");
}

#[test]
fn test_capitalize_in_place() {
    let mut text = String::from("mERCOLEDÌ");
    text.capitalize_first_letter();
    assert_eq!(text, "Mercoledì");
}

#[test]
fn test_local_uses_bundle() {
    let bundle = Bundle::from_toml_str("start = \"Avvia\"").unwrap();
    assert_eq!("start".local(&bundle), "Avvia");
}

#[test]
fn test_local_falls_back_to_key() {
    assert_eq!("timer.stop".local(&Bundle::empty()), "timer.stop");
}
