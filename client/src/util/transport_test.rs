use super::*;

#[test]
fn set_cookie_directive_has_path_and_max_age() {
    assert_eq!(set_cookie_directive("abc.def.ghi"), "token=abc.def.ghi; path=/; max-age=86400");
}

#[test]
fn clear_cookie_directive_expires_immediately() {
    assert_eq!(clear_cookie_directive(), "token=; path=/; max-age=0");
}

#[test]
fn cookie_value_finds_named_cookie() {
    let header = "theme=dark; token=aaa.bbb.ccc; other=1";
    assert_eq!(cookie_value(header, "token"), Some("aaa.bbb.ccc"));
    assert_eq!(cookie_value(header, "theme"), Some("dark"));
}

#[test]
fn cookie_value_ignores_prefix_matches() {
    assert_eq!(cookie_value("xtoken=nope; tokens=no", "token"), None);
}

#[test]
fn cookie_value_treats_empty_as_absent() {
    assert_eq!(cookie_value("token=; theme=dark", "token"), None);
    assert_eq!(cookie_value("", "token"), None);
}

#[test]
fn cookie_value_keeps_equals_inside_value() {
    assert_eq!(cookie_value("token=abc==", "token"), Some("abc=="));
}

#[test]
fn read_is_none_outside_browser() {
    assert_eq!(read(), None);
}
