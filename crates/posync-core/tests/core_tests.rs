use posync_core::{Catalog, CatalogError, Message, ScanConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n\n";

/// A catalog as `msginit` and a translator would leave it.
const GETTEXT_CATALOG: &str = r#"# German translations for the demo package.
# Copyright (C) 2024 THE PACKAGE'S COPYRIGHT HOLDER
#
msgid ""
msgstr ""
"Project-Id-Version: demo 1.0\n"
"Report-Msgid-Bugs-To: \n"
"POT-Creation-Date: 2024-03-01 12:00+0100\n"
"PO-Revision-Date: 2024-03-02 09:30+0100\n"
"Last-Translator: Jo Doe <jo@example.com>\n"
"Language-Team: German\n"
"Language: de\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

#. Shown on the start screen
#: src/main.c:12
#, c-format
msgid "Hello, %s!"
msgstr "Hallo, %s!"

#: src/main.c:20
msgid ""
"A long message that "
"spans two lines"
msgstr ""

#: src/main.c:31
msgid "One file"
msgid_plural "%d files"
msgstr[0] "Eine Datei"
msgstr[1] "%d Dateien"
"#;

fn write_catalog(path: &Path, messages: &[(&str, &str)]) {
    let mut body = String::from(HEADER);
    for (msgid, msgstr) in messages {
        body.push_str(&format!("msgid \"{msgid}\"\nmsgstr \"{msgstr}\"\n\n"));
    }
    fs::write(path, body).unwrap();
}

#[test]
fn test_catalog_rewrite_keeps_untouched_messages() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("de.po");
    write_catalog(&path, &[("one", "eins"), ("two", ""), ("three", "drei")]);

    let mut catalog = Catalog::load(&path).unwrap();
    catalog.set_translation("two", "zwei");
    catalog.save(&path).unwrap();

    let messages: Vec<Message> = Catalog::load(&path).unwrap().messages().collect();
    assert_eq!(
        messages,
        vec![
            Message::new("one", "eins"),
            Message::new("two", "zwei"),
            Message::new("three", "drei"),
        ]
    );
}

#[test]
fn test_catalog_save_to_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("de.po");
    write_catalog(&path, &[("one", "eins")]);

    let catalog = Catalog::load(&path).unwrap();
    let target = temp.path().join("no/such/dir/de.po");
    let err = catalog.save(&target).unwrap_err();

    assert!(matches!(err, CatalogError::Write { .. }));
    assert_eq!(err.path(), target.as_path());
}

#[test]
fn test_catalog_without_messages() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.po");
    write_catalog(&path, &[]);

    let catalog = Catalog::load(&path).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.messages().count(), 0);
}

#[test]
fn test_gettext_catalog_keeps_metadata_on_rewrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("de.po");
    fs::write(&path, GETTEXT_CATALOG).unwrap();

    let mut catalog = Catalog::load(&path).unwrap();
    let messages: Vec<Message> = catalog.messages().collect();
    assert_eq!(
        messages,
        vec![
            Message::new("Hello, %s!", "Hallo, %s!"),
            Message::new("A long message that spans two lines", ""),
            Message::new("One file", ""),
        ]
    );

    assert_eq!(
        catalog.set_translation("A long message that spans two lines", "Eine lange Nachricht"),
        1
    );
    catalog.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("Language: de\\n"));
    assert!(written.contains("Plural-Forms: nplurals=2; plural=(n != 1);\\n"));
    assert!(written.contains("msgstr[1] \"%d Dateien\""));
    assert_eq!(
        Catalog::load(&path).unwrap().messages().nth(1),
        Some(Message::new(
            "A long message that spans two lines",
            "Eine lange Nachricht"
        ))
    );
}

#[test]
fn test_scan_config_default_root() {
    let config = ScanConfig::default();
    assert_eq!(config.root, PathBuf::from("."));
    assert!(config.matches("messages.po"));
}

#[test]
fn test_duplicate_identity_in_one_file_collapses() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("de.po");
    write_catalog(&path, &[("one", "eins"), ("two", ""), ("one", "ein")]);

    let messages: Vec<Message> = Catalog::load(&path).unwrap().messages().collect();
    assert_eq!(
        messages,
        vec![Message::new("one", "ein"), Message::new("two", "")]
    );
}
