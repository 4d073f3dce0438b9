// tests/runner.rs
mod common;

use common::{node_table, page, project_table};
use kz_parse::data::Outcome;
use kz_parse::host::BlockHost;
use kz_parse::runner::{run, Command};
use kz_parse::specs::Accordion;
use kz_parse::translate::Translator;

#[test]
fn command_names_labels_and_aliases() {
    for cmd in Command::ALL {
        assert_eq!(Command::from_name(cmd.name()), Some(cmd));
        assert_eq!(Command::from_name(cmd.label()), Some(cmd));
        assert_eq!(cmd.name().parse::<Command>(), Ok(cmd));
    }
    assert_eq!(Command::from_name("  COLLAPSE ALL "), Some(Command::CollapseAll));
    assert_eq!(Command::from_name("Parse Summer"), Some(Command::Summer1Farming));
    assert_eq!(Command::from_name("Parse Summer Developments"), Some(Command::Summer1Projects));
    assert_eq!(Command::from_name("summer3-farming"), None);
    assert!("nope".parse::<Command>().unwrap_err().contains("collapse-all"));
}

fn summer1_page() -> Accordion {
    let html = page(&[
        ("主線關卡", true, node_table("story", &[("淡水", "1", "100%")])),
        ("漂流物發現！", false, node_table("drift", &[("淡水", "1", "100%")])),
        ("海岸", false, node_table("海岸 初級", &[("淡水", "3", "12.5%"), ("種火", "1", "80%")])),
        ("開拓計畫", false, project_table("開拓計畫 1 A", "木材/石材", "10/5")),
    ]);
    Accordion::parse(&html).unwrap()
}

#[test]
fn summer1_farming_skips_story_and_non_resource_drops() {
    let mut doc = summer1_page();
    let Outcome::Farming(result) = run(Command::Summer1Farming, &mut doc, Translator::builtin()).unwrap() else {
        panic!("expected a farming result");
    };

    assert_eq!(result.keys().collect::<Vec<_>>(), ["coast beginner"]);
    assert_eq!(result["coast beginner"].keys().collect::<Vec<_>>(), ["water"]);
    assert!(!doc.is_open(0));
    assert!(!doc.is_open(3));
}

#[test]
fn summer1_projects_then_collapse() {
    let mut doc = summer1_page();
    let tr = Translator::builtin();

    let Outcome::Projects(result) = run(Command::Summer1Projects, &mut doc, tr).unwrap() else {
        panic!("expected a projects result");
    };
    assert_eq!(result["Project 1 A"]["wood"], 10);
    assert_eq!((0..doc.block_count()).filter(|&i| doc.is_open(i)).count(), 1);

    assert_eq!(run(Command::CollapseAll, &mut doc, tr).unwrap(), Outcome::Collapsed(1));
    assert!((0..doc.block_count()).all(|i| !doc.is_open(i)));
}

#[test]
fn summer2_projects_use_the_other_block_name() {
    let html = page(&[
        ("開拓計畫", true, project_table("1 A", "木材", "1")),
        ("開拓計劃", false, project_table("2 B", "水泥", "7")),
    ]);
    let mut doc = Accordion::parse(&html).unwrap();

    let outcome = run(Command::Summer2Projects, &mut doc, Translator::builtin()).unwrap();
    let Outcome::Projects(result) = outcome else { panic!("expected a projects result") };
    assert_eq!(result.keys().collect::<Vec<_>>(), ["Project 2 B"]);
    assert_eq!(result["Project 2 B"]["cement"], 7);
}
