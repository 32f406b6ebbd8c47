use super::*;
use crate::columns::IntroColumns;

fn table(content: &str) -> Table {
    Table::parse("test.csv", content).unwrap()
}

#[test]
fn artifact_rows_skip_incomplete() {
    let t = table(
        "\
卡牌标题,ID,基础效果,套装1,套装2,套装3,标签颜色,价格
火之心,2001,攻击+5,烈焰,,寒冰,2.0,150
无ID,,攻击+1,烈焰,,,1,1
空效果,2003,,烈焰,,,1,1
",
    );
    let rows = t.map_records(&mut ArtifactMapper::default()).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.config_id, "2001");
    assert_eq!(row.set_names, vec!["烈焰", "寒冰"]);
    assert_eq!(row.tag_color, "2");
    assert_eq!(row.price, "150");
}

#[test]
fn artifact_defaults_for_missing_optional_columns() {
    let t = table("卡牌标题,ID,基础效果\n火之心,2001,攻击+5\n");
    let rows = t.map_records(&mut ArtifactMapper::default()).unwrap();
    assert_eq!(rows[0].tag_color, "0");
    assert_eq!(rows[0].price, "0");
    assert!(rows[0].set_names.is_empty());
}

#[test]
fn artifact_requires_columns() {
    let t = table("卡牌标题,ID\n");
    let err = t.map_records(&mut ArtifactMapper::default()).unwrap_err();
    assert!(matches!(err, TableError::MissingColumns { ref missing, .. } if missing == &["基础效果"]));
}

#[test]
fn item_text_detects_legacy_set_column() {
    let t = table("卡牌标题,基础效果,套装1\n火之心,攻击+5,烈焰\n冰之心,防御+5,\n,x,y\n");
    let rows = t.map_records(&mut ItemTextMapper::default()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].set_name.as_deref(), Some("烈焰"));
    assert_eq!(rows[1].set_name, None);
}

#[test]
fn item_text_without_set_column_fails() {
    let t = table("卡牌标题,基础效果\n");
    let err = t.map_records(&mut ItemTextMapper::default()).unwrap_err();
    assert!(err.to_string().contains("套装 or 套装1"), "{err}");
}

#[test]
fn set_id_rows_read_repeated_state_columns() {
    let t = table(
        "\
名字,ID,套装需求1,状态效果ID,套装需求2,状态效果ID,套装需求3,状态效果ID
烈焰,101,2,5001,4.0,5002,,
,102,2,1,4,2,6,3
",
    );
    let rows = t.map_records(&mut SetIdMapper::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].requirements, vec!["2", "4", "99"]);
    assert_eq!(rows[0].state_ids, vec!["5001", "5002", "0"]);
}

#[test]
fn set_id_rows_tolerate_missing_state_columns() {
    let t = table("名字,ID,套装需求1,套装需求2,套装需求3,状态效果ID\n烈焰,101,2,4,6,7\n");
    let rows = t.map_records(&mut SetIdMapper::default()).unwrap();
    assert_eq!(rows[0].requirements, vec!["2", "4", "6"]);
    assert_eq!(rows[0].state_ids, vec!["7", "0", "0"]);
}

#[test]
fn monsters_skip_footer_and_bad_numbers() {
    let t = table(
        "\
怪物,元件ID,单体强度,最小生成
史莱姆,1077936200.0,5,1
哥布林,1077936201,abc,2
,1077936202,1,1
中位数,1,1,1
骷髅,1077936203,7.5,
",
    );
    let rows = t.map_records(&mut MonsterMapper::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        MonsterRow {
            name: "史莱姆".into(),
            entity_id: "1077936200".into(),
            strength: "5".into(),
            min_spawn: "1".into(),
        }
    );
}

#[test]
fn intros_reject_empty_id_with_line() {
    let t = table("元件ID,名字,介绍\n1,a,x\n,b,y\n");
    let err = t.map_records(&mut IntroMapper::default()).unwrap_err();
    assert!(matches!(err, TableError::EmptyField { line: 3, .. }), "{err}");
}

#[test]
fn intros_reject_duplicate_id() {
    let t = table("元件ID,名字,介绍\n1,a,x\n2,b,y\n1,c,z\n");
    let err = t.map_records(&mut IntroMapper::default()).unwrap_err();
    match err {
        TableError::DuplicateKey { line, value, .. } => {
            assert_eq!(line, 4);
            assert_eq!(value, "1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn intros_use_configured_columns() {
    let columns = IntroColumns {
        id: "id".into(),
        name: "name".into(),
        description: "desc".into(),
    };
    let t = table("id,name,desc\n7, Slime , Bouncy \n");
    let rows = t.map_records(&mut IntroMapper::new(columns)).unwrap();
    assert_eq!(rows[0].name, "Slime");
    assert_eq!(rows[0].description, "Bouncy");
}

#[test]
fn upgrades_collect_trailing_pairs() {
    let t = table(
        "\
名字,上限,状态ID,描述,过渡1,最终1
狂暴,3,901, 攻击+(1/2/3) ,,
护盾,,902,,t1,f1,t2,,,
单列,,903,,only
",
    );
    let rows = t.map_records(&mut UpgradeMapper::default()).unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].description, " 攻击+(1/2/3) ");
    assert!(rows[0].explicit_pairs.is_empty());

    assert_eq!(
        rows[1].explicit_pairs,
        vec![
            ("t1".to_string(), "f1".to_string()),
            ("t2".to_string(), "t2".to_string()),
        ]
    );
    assert_eq!(
        rows[2].explicit_pairs,
        vec![("only".to_string(), "only".to_string())]
    );
}
