use sheetstyle_core::{
    BorderDescriptor, BorderEdge, BorderStyle, CUSTOM_NUM_FMT_START, CellXf, Color,
    FillDescriptor, FontDescriptor, InsertMode, NumFmt, StyleConfig, StyleManager, StyleModel,
};
use std::fs;

fn calibri_11() -> FontDescriptor {
    FontDescriptor {
        size: Some(11.0),
        name: Some("Calibri".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_fresh_manager_resolves_default_style() {
    let mut manager = StyleManager::new();

    let model = manager.style_model(0).cloned().expect("style 0 always exists");
    assert_eq!(model.num_fmt, None);
    assert_eq!(model.font, Some(FontDescriptor::workbook_default()));
    assert_eq!(model.fill, None);
    assert_eq!(model.border, None);
}

#[test]
fn test_attribute_free_defaults_resolve_to_empty_model() {
    let config = StyleConfig {
        default_font: FontDescriptor::default(),
        ..Default::default()
    };
    let mut manager = StyleManager::with_config(config);

    let model = manager.style_model(0).expect("style 0 always exists");
    assert!(model.is_empty());
}

#[test]
fn test_build_scenario() {
    let mut manager = StyleManager::new();

    let font_id = manager.add_font(calibri_11());
    assert_eq!(font_id, 1);

    // Built-in code keeps its reserved id, a custom one takes the first free slot
    assert_eq!(manager.add_num_fmt_str("0.00%"), 10);
    let num_fmt_id = manager.add_num_fmt_str("0.000%");
    assert_eq!(num_fmt_id, CUSTOM_NUM_FMT_START);

    let xf = CellXf::new(num_fmt_id, font_id, 0, 0, 0);
    let style_id = manager.add_xf(xf, InsertMode::Deduplicate);
    assert_eq!(style_id, 1);

    let model = manager.style_model(style_id).cloned().expect("style was registered");
    assert_eq!(model.num_fmt.as_deref(), Some("0.000%"));
    assert_eq!(model.font, Some(calibri_11()));

    assert_eq!(manager.add_xf(xf, InsertMode::Deduplicate), 1);
    assert_eq!(manager.cell_xfs().len(), 2);
}

#[test]
fn test_builtin_percent_style() {
    let mut manager = StyleManager::new();

    let num_fmt_id = manager.add_num_fmt_str("0.00%");
    let style_id = manager.add_xf(CellXf::new(num_fmt_id, 0, 0, 0, 0), InsertMode::Deduplicate);

    let model = manager.style_model(style_id).cloned().unwrap();
    assert_eq!(model.num_fmt.as_deref(), Some("0.00%"));
    assert!(manager.num_fmts().is_empty());
}

#[test]
fn test_unknown_style_id_is_not_found() {
    let mut manager = StyleManager::new();

    assert!(manager.style_model(1).is_none());
    assert!(manager.xf(1).is_none());
    assert!(manager.font(5).is_none());
    assert!(manager.num_fmt_code(CUSTOM_NUM_FMT_START).is_none());
}

#[test]
fn test_identical_fonts_collapse() {
    let mut manager = StyleManager::new();

    let a = manager.add_font(FontDescriptor {
        bold: true,
        color: Some(Color::argb("FF0000FF")),
        ..calibri_11()
    });
    let mut rebuilt = calibri_11();
    rebuilt.color = Some(Color::argb("FF0000FF"));
    rebuilt.bold = true;
    let b = manager.add_font(rebuilt);

    assert_eq!(a, b);
    assert_eq!(manager.fonts().len(), 2);

    // The seeded default is found again by value
    assert_eq!(manager.add_font(FontDescriptor::workbook_default()), 0);
}

#[test]
fn test_parse_replay_preserves_positions() {
    let mut manager = StyleManager::new();

    // Records as they appear in an existing file; 1 and 2 are identical
    manager.add_parsed_num_fmt(NumFmt::new(165, "0.0"));
    let bold = manager.add_font(FontDescriptor {
        bold: true,
        ..calibri_11()
    });
    let replayed = [
        CellXf::new(165, bold, 0, 0, 0),
        CellXf::new(165, bold, 0, 0, 0),
        CellXf::new(14, 0, 0, 0, 0),
    ];
    let ids: Vec<u32> = replayed
        .iter()
        .map(|xf| manager.add_xf(*xf, InsertMode::Preserve))
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    for (id, xf) in ids.iter().zip(replayed.iter()) {
        assert_eq!(manager.xf(*id), Some(xf));
    }

    // New requests after the replay dedup against the newest duplicate
    assert_eq!(manager.add_xf(replayed[0], InsertMode::Deduplicate), 2);

    // And new custom formats never collide with parsed ids
    assert_eq!(manager.add_num_fmt_str("0.0"), 165);
    assert_eq!(manager.add_num_fmt_str("0.00000"), 166);

    let first = manager.style_model(1).cloned();
    let second = manager.style_model(2).cloned();
    assert_eq!(first, second);
    assert_eq!(first.and_then(|m| m.num_fmt), Some("0.0".to_string()));
}

#[test]
fn test_model_is_stable_after_tables_grow() {
    let mut manager = StyleManager::new();
    let font_id = manager.add_font(calibri_11());
    let style_id = manager.add_xf(CellXf::new(2, font_id, 0, 0, 0), InsertMode::Deduplicate);

    let before = manager.style_model(style_id).cloned();

    manager.add_font(FontDescriptor {
        italic: true,
        ..calibri_11()
    });
    manager.add_num_fmt_str("[Red]0.00");
    manager.add_xf(CellXf::new(0, 2, 0, 0, 0), InsertMode::Deduplicate);

    let after = manager.style_model(style_id).cloned();
    assert_eq!(before, after);
}

#[test]
fn test_fill_and_border_in_model() {
    let mut manager = StyleManager::new();

    let fill_id = manager.add_fill(FillDescriptor::solid(Color::theme(4).with_tint(0.4)));
    let border_id = manager.add_border(BorderDescriptor::outline(BorderEdge::new(BorderStyle::Thin)));
    let style_id = manager.add_xf(CellXf::new(0, 0, fill_id, border_id, 0), InsertMode::Deduplicate);

    let model = manager.style_model(style_id).cloned().unwrap();
    assert_eq!(
        model.fill,
        Some(FillDescriptor::solid(Color::theme(4).with_tint(0.4)))
    );
    assert_eq!(
        model.border.map(|b| b.top.style),
        Some(Some(BorderStyle::Thin))
    );
    assert!(manager.validate().is_ok());
}

#[test]
fn test_model_serialized_shape() {
    let mut manager = StyleManager::new();
    let font_id = manager.add_font(calibri_11());
    let num_fmt_id = manager.add_num_fmt_str("0.000%");
    let style_id = manager.add_xf(CellXf::new(num_fmt_id, font_id, 0, 0, 0), InsertMode::Deduplicate);

    let model = manager.style_model(style_id).unwrap();
    assert_eq!(
        serde_json::to_value(model).unwrap(),
        serde_json::json!({
            "numFmt": "0.000%",
            "font": { "size": 11.0, "name": "Calibri" }
        })
    );

    assert_eq!(
        serde_json::to_value(StyleModel::default()).unwrap(),
        serde_json::json!({})
    );
}

#[test]
fn test_manager_from_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sheetstyle.toml");
    fs::write(
        &path,
        r#"
[default_font]
name = "Arial"
size = 10.0
family = 2

[default_border.bottom]
style = "thin"
"#,
    )?;

    let config = StyleConfig::from_file(&path)?;
    config.validate()?;
    let mut manager = StyleManager::with_config(config);

    // The configured defaults are what style 0 resolves to
    let model = manager.style_model(0).cloned().unwrap();
    assert_eq!(
        model.font.and_then(|f| f.name),
        Some("Arial".to_string())
    );
    assert_eq!(
        model.border.map(|b| b.bottom.style),
        Some(Some(BorderStyle::Thin))
    );

    // Calibri is no longer the default, so it gets a new id
    assert_eq!(manager.add_font(calibri_11()), 1);
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(StyleConfig::from_file(dir.path().join("missing.toml")).is_err());
}
