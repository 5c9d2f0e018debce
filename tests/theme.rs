use jinja_highlight::syntax::Category;
use jinja_highlight::theme::{
    self, Color, Theme, BUILTIN_THEMES, DEFAULT_DARK_YAML, DEFAULT_LIGHT_YAML,
};

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!(color.r, 0x1E);
    assert_eq!(color.g, 0x1E);
    assert_eq!(color.b, 0x1E);
    assert_eq!(color.a, 255);
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#1E1E1E80").unwrap();
    assert_eq!(color.a, 0x80);
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn test_default_theme() {
    let theme = Theme::default_dark();
    assert_eq!(theme.name, "Default Dark");
    assert_eq!(
        theme.style(Category::Keyword).color,
        Color::rgb(0xC5, 0x86, 0xC0)
    );
    assert!(theme.style(Category::Comment).italic);
}

#[test]
fn test_default_dark_yaml_parses() {
    let theme = Theme::from_yaml(DEFAULT_DARK_YAML).unwrap();
    assert_eq!(theme.name, "Default Dark");
}

#[test]
fn test_default_light_yaml_parses() {
    let theme = Theme::from_yaml(DEFAULT_LIGHT_YAML).unwrap();
    assert_eq!(theme.name, "Default Light");
    assert_eq!(
        theme.style(Category::String).color,
        Color::rgb(0xA3, 0x15, 0x15)
    );
}

#[test]
fn test_builtin_themes_style_every_category() {
    for builtin in BUILTIN_THEMES {
        let data: theme::ThemeData = serde_yaml::from_str(builtin.yaml).unwrap();
        for category in Category::ALL {
            assert!(
                data.categories.contains_key(category.name()),
                "{} is missing {}",
                builtin.id,
                category
            );
        }
    }
}

#[test]
fn test_from_builtin_unknown_id() {
    assert!(Theme::from_builtin("no-such-theme").is_err());
}

#[test]
fn test_builtins_are_listed() {
    let themes = theme::list_available_themes();
    for builtin in BUILTIN_THEMES {
        assert!(themes.iter().any(|t| t.id == builtin.id));
    }
}

#[test]
fn test_listed_theme_ids_are_unique() {
    let themes = theme::list_available_themes();
    let mut ids: Vec<&str> = themes.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), themes.len());
}

#[test]
fn test_load_theme_unknown_id_errors() {
    assert!(theme::load_theme("no-such-theme-anywhere").is_err());
}
