use std::fs;

use sheet_forge_export::{
    Settings, SettingsSource, build_artifacts, build_monsters, render_set_text, write_json, write_text,
};
use sheet_forge_table::{BonusSetTable, Table};
use tempfile::TempDir;

const SETS: &str = "\
名字,ID,套装需求1,套装效果1,套装需求2,套装效果2,套装效果简略描述
烈焰,101,2,攻击+10%,4,燃烧+20%,火系强化
";

const ITEMS: &str = "\
卡牌标题,ID,基础效果,套装1,标签颜色,价格
火之心,2001,攻击+5,烈焰,1,100
";

#[test]
fn artifacts_round_trip_through_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sets.csv"), SETS).unwrap();
    fs::write(tmp.path().join("items.csv"), ITEMS).unwrap();

    let settings = Settings::default();
    let sets = BonusSetTable::load(
        &Table::open(&tmp.path().join("sets.csv")).unwrap(),
        &settings.columns.sets,
    )
    .unwrap();
    let items = Table::open(&tmp.path().join("items.csv")).unwrap();
    let export = build_artifacts(&items, &sets, &settings.artifacts, &settings.columns.items).unwrap();

    let out = tmp.path().join("out/artifacts.json");
    write_json(&out, &export.dict, 2).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n  \"type\": \"Dict\""));
    assert!(written.contains("攻击+5"));
    assert!(!written.contains("\\u"));

    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["value"][0]["key"]["value"], "1");
    assert_eq!(
        json["value"][0]["value"]["value"]["value"][4]["value"],
        "攻击+5\\n\\n<color=#71db60>烈焰</color>\\n<color=#FFFFFFBF>2件套：</color>攻击+10%\\n<color=#FFFFFFBF>4件套：</color>燃烧+20%"
    );
}

#[test]
fn monsters_use_configured_indent() {
    let tmp = TempDir::new().unwrap();
    let table = Table::parse("monsters.csv", "怪物,元件ID,单体强度,最小生成\n史莱姆,7,5,2\n").unwrap();
    let settings = Settings::default();
    let dict = build_monsters(&table, &settings.monsters, &settings.columns.monsters).unwrap();

    let out = tmp.path().join("monsters.json");
    write_json(&out, &dict, settings.monsters.indent).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n   \"type\""));
}

#[test]
fn set_text_written_as_utf8() {
    let tmp = TempDir::new().unwrap();
    let sets = BonusSetTable::load(&Table::parse("sets.csv", SETS).unwrap(), &Default::default()).unwrap();

    let out = tmp.path().join("text/sets.txt");
    write_text(&out, &render_set_text(&sets)).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "烈焰\n2件套：攻击+10%  4件套：燃烧+20%\n"
    );
}

#[test]
fn settings_file_overrides_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(
        &path,
        "[artifacts]\ndescription_budget = 80\nover_budget = \"abort\"\n\n[columns.monsters]\nname = \"Monster\"\n",
    )
    .unwrap();

    let (settings, source) = Settings::resolve(Some(&path)).unwrap();
    assert_eq!(source, SettingsSource::File(path.clone()));
    assert_eq!(settings.artifacts.description_budget, 80);
    assert_eq!(settings.artifacts.struct_id, "1077936134");
    assert_eq!(settings.columns.monsters.name, "Monster");
    assert_eq!(settings.columns.monsters.entity_id, "元件ID");
}

#[test]
fn malformed_settings_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[artifacts\n").unwrap();

    let err = Settings::resolve(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("settings.toml"));
}
