use pretty_assertions::assert_eq;

use super::*;

#[test]
fn custom_rows_skip_properties_with_dedicated_fields() {
    let styles: StyleObject = [("color", "red"), ("letter-spacing", "2px"), ("box-shadow", "none")]
        .into_iter()
        .collect();

    assert_eq!(
        custom_rows(&styles),
        vec![
            ("box-shadow".to_owned(), "none".to_owned()),
            ("letter-spacing".to_owned(), "2px".to_owned()),
        ]
    );
}

#[test]
fn custom_rows_render_numbers_plainly() {
    let mut styles = StyleObject::new();
    styles.insert("z-index", 3.0);
    assert_eq!(custom_rows(&styles), vec![("z-index".to_owned(), "3".to_owned())]);
}

#[test]
fn custom_rows_show_numbers_with_units() {
    let mut styles = StyleObject::new();
    styles.insert("letterSpacing", 2.0);
    assert_eq!(custom_rows(&styles), vec![("letter-spacing".to_owned(), "2px".to_owned())]);
}
