//! End-to-end conversion of a mixed input folder through the public API.

use scriptorium::config::Config;
use scriptorium::convert::{self, Outcome, Summary};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup(root: &Path) -> Config {
    let config = Config {
        input_dir: root.join("data_input"),
        output_dir: root.join("site"),
        ..Config::default()
    };
    fs::create_dir_all(&config.input_dir).unwrap();

    fs::write(
        config.input_dir.join("01-prayers.json"),
        r#"[
            {
                "id": "utrennyaya",
                "type": "prayer",
                "title": "Утренняя молитва",
                "categories": ["Утро"],
                "content_ru": "Текст..."
            },
            {
                "id": "otche-nash",
                "title": "Отче наш",
                "original_title": "Πάτερ ἡμῶν",
                "categories": ["Основные"],
                "content_ru": "Отче наш, Иже еси на небесех",
                "content_uk": "Отче наш, що єси на небесах"
            },
            {
                "id": "psalom-50",
                "title": "Псалом 50",
                "categories": ["ПСАЛТИРЬ"],
                "content_ru": "Помилуй мя, Боже"
            }
        ]"#,
    )
    .unwrap();

    fs::write(
        config.input_dir.join("02-ruth.json"),
        r#"{
            "type": "bible_book",
            "testament_slug": "old-testament",
            "book_slug": "ruth",
            "book_title": "Книга Руфи",
            "categories": ["Библия", "Ветхий Завет"],
            "chapters": [
                {"number": 1, "content_ru": "Глава первая", "content_uk": "Розділ перший"},
                {"number": 12, "content_ru": "Глава двенадцатая"}
            ]
        }"#,
    )
    .unwrap();

    fs::write(config.input_dir.join("03-broken.json"), "[{\"id\": ").unwrap();
    fs::write(config.input_dir.join("notes.txt"), "ignored").unwrap();

    config
}

fn read(config: &Config, relative: &str) -> String {
    fs::read_to_string(config.output_dir.join(relative))
        .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
}

#[test]
fn converts_mixed_folder() {
    let tmp = TempDir::new().unwrap();
    let config = setup(tmp.path());

    let outcome = convert::run(&config, None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Completed(Summary {
            files: 3,
            failed_files: 1,
            documents: 7,
            skipped_records: 0,
        })
    );

    assert_eq!(
        read(&config, "молитвы/utrennyaya/ru.md"),
        "---\ntitle: \"Утренняя молитва\"\nslug: \"utrennyaya\"\ncategories: [\"Утро\"]\n---\n\nТекст..."
    );
    assert!(!config.output_dir.join("молитвы/utrennyaya/uk.md").exists());

    let ru = read(&config, "молитвы/otche-nash/ru.md");
    let uk = read(&config, "молитвы/otche-nash/uk.md");
    assert!(ru.contains("original_title: \"Πάτερ ἡμῶν\"\n"));
    let header = |doc: &str| doc.split("\n---\n\n").next().unwrap().to_string();
    assert_eq!(header(&ru), header(&uk));
    assert!(uk.ends_with("Отче наш, що єси на небесах"));

    assert!(config.output_dir.join("псалтирь/psalom-50/ru.md").is_file());

    assert_eq!(
        read(&config, "библия/old-testament/ruth/chapter-01/uk.md"),
        "---\nbook: \"Книга Руфи\"\nchapter: 1\ncategories: [\"Библия\", \"Ветхий Завет\"]\n---\n\nРозділ перший"
    );
    assert!(
        config
            .output_dir
            .join("библия/old-testament/ruth/chapter-12/ru.md")
            .is_file()
    );
}

#[test]
fn rerun_overwrites_with_new_content() {
    let tmp = TempDir::new().unwrap();
    let config = setup(tmp.path());
    convert::run(&config, None).unwrap();

    fs::write(
        config.input_dir.join("01-prayers.json"),
        r#"[{"id": "utrennyaya", "title": "Новая", "content_ru": "Новый текст"}]"#,
    )
    .unwrap();
    convert::run(&config, None).unwrap();

    assert_eq!(
        read(&config, "молитвы/utrennyaya/ru.md"),
        "---\ntitle: \"Новая\"\nslug: \"utrennyaya\"\ncategories: []\n---\n\nНовый текст"
    );
}
