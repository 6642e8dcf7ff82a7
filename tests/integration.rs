// SPDX-License-Identifier: MPL-2.0
use image_rs::{Rgba, RgbaImage};
use tempfile::tempdir;
use ui_lens::app::config::{self, Config};
use ui_lens::app::session::{FileOrigin, Phase, Preview, ResultsPanel, Session, Tab};
use ui_lens::domain::analysis::{parse_markup, AnalysisReport, Block};
use ui_lens::domain::input::Source;
use ui_lens::error::{Error, InputError};
use ui_lens::i18n::fluent::I18n;
use ui_lens::infrastructure::upload::{image_dimensions, read_upload};
use ui_lens::ui::theming::ThemeMode;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_en.tr("analyze-button"), i18n_fr.tr("analyze-button"));
}

#[test]
fn cli_language_beats_config() {
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), None, &settings);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn theme_and_server_survive_a_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Dark;
    settings.server.base_url = Some("http://critique.internal:8000".to_string());
    settings.server.request_timeout_secs = Some(90);
    config::save_to_path(&settings, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, settings);
}

#[test]
fn text_file_is_not_accepted_as_upload() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an image").expect("write txt");

    match read_upload(&path) {
        Err(Error::Input(InputError::NotAnImage { mime })) => assert!(!mime.starts_with("image/")),
        other => panic!("expected NotAnImage, got {other:?}"),
    }
}

#[test]
fn file_flow_from_disk_to_report() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("landing.png");
    RgbaImage::from_pixel(12, 8, Rgba([200, 200, 200, 255]))
        .save(&path)
        .expect("write png");

    let mut session = Session::new();
    let ticket = session
        .begin_file_load(FileOrigin::Drop)
        .expect("drop accepted on file tab");
    let upload = read_upload(&path).expect("png upload");
    assert_eq!(upload.mime(), "image/png");
    let dims = image_dimensions(upload.bytes());
    assert_eq!(dims, Some((12, 8)));

    let preview = Preview::from_bytes(upload.bytes().to_vec(), upload.file_name(), dims);
    assert!(session.accept_file(ticket, upload, preview));
    assert_eq!(session.phase(), Phase::Previewing);
    assert!(matches!(session.source(), Some(Source::File(_))));

    let analysis = session.begin_analysis().expect("source present");
    assert!(!session.can_submit());
    let content = "### Summary\nvisual_design: 8\nux: 6\naccessibility: 5\n\n- **Contrast** is low";
    assert!(session.finish_analysis(analysis, Ok(AnalysisReport::new(content))));

    let Some(ResultsPanel::Report(report)) = session.results() else {
        panic!("expected a report");
    };
    let scores = report.scores();
    assert_eq!(scores.visual_design_or_placeholder(), "8");
    assert_eq!(scores.ux_or_placeholder(), "6");
    assert_eq!(scores.accessibility_or_placeholder(), "5");
    assert_eq!(session.report_content(), Some(content));
    assert!(session.can_submit());
}

#[test]
fn url_flow_and_tab_switch() {
    let mut session = Session::new();
    session.select_tab(Tab::Url);
    session.set_url_draft("https://example.com/pricing".to_string());

    let draft = session.url_draft().to_string();
    let ticket = session.begin_preview(&draft).expect("valid url");
    assert_eq!(session.phase(), Phase::LoadingPreview);
    assert!(session.begin_analysis().is_err());

    let preview = Preview::from_bytes(vec![0x89, b'P', b'N', b'G'], draft.clone(), None);
    assert!(session.finish_preview(ticket, Ok(preview)));
    assert_eq!(session.phase(), Phase::Previewing);
    assert_eq!(
        session.source().map(Source::label),
        Some("https://example.com/pricing")
    );

    session.select_tab(Tab::File);
    assert_eq!(session.phase(), Phase::Collecting);
    assert!(session.source().is_none());
    assert_eq!(session.url_draft(), "https://example.com/pricing");
}

#[test]
fn dropping_or_picking_on_url_tab_is_refused() {
    let mut session = Session::new();
    session.select_tab(Tab::Url);
    assert_eq!(
        session.begin_file_load(FileOrigin::Drop).unwrap_err(),
        InputError::WrongTab
    );
    assert_eq!(
        session.begin_file_load(FileOrigin::Picker).unwrap_err(),
        InputError::WrongTab
    );
    assert!(session.begin_file_load(FileOrigin::CommandLine).is_ok());
}

#[test]
fn file_dialog_answer_is_discarded_after_switching_to_url() {
    let mut session = Session::new();
    let pick = session.begin_pick().expect("picker opens on file tab");

    session.select_tab(Tab::Url);
    session.set_url_draft("https://example.com".to_string());
    let draft = session.url_draft().to_string();
    session.begin_preview(&draft).expect("valid url");

    assert!(!session.is_current_pick(pick));
    assert_eq!(
        session.begin_file_load(FileOrigin::Picker).unwrap_err(),
        InputError::Busy
    );
    assert_eq!(session.phase(), Phase::LoadingPreview);
    assert!(session.source().is_none());
}

#[test]
fn critique_markup_renders_headings_lists_and_breaks() {
    let blocks = parse_markup("### Layout\n\n\n- spacing is tight\nFinal note");
    assert!(matches!(blocks[0], Block::Heading(_)));
    assert_eq!(blocks[1], Block::Break);
    assert!(matches!(blocks[2], Block::ListItem(_)));
    assert!(matches!(blocks[3], Block::Text(_)));
    assert_eq!(blocks.len(), 4);
}
