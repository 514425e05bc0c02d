//! Record reader, configuration and report rendering tests.

use std::io::Write;

use issue_grouper::{
    render, ClusterConfig, ClusterEngine, Corpus, GroupError, RecordReader, ReportFormat,
    ReportOptions, DEFAULT_MIN_DOCUMENT_LENGTH, DEFAULT_SIM_THRESHOLD,
};

fn support_corpus() -> Corpus<u64> {
    let mut corpus = Corpus::new();
    corpus.load(1, "server crashed on login");
    corpus.load(2, "server crashes during login");
    corpus.load(3, "refund requested for payment");
    corpus.load(4, "printer jammed again");
    corpus.load(5, "keyboard lights flicker");
    corpus.load(6, "invoice totals wrong");
    corpus
}

fn render_to_string(options: ReportOptions) -> String {
    let mut corpus = support_corpus();
    let clusters = ClusterEngine::new(0.1).cluster(&mut corpus);
    let mut out = Vec::new();
    render(&mut out, &corpus, &clusters, options).unwrap();
    String::from_utf8(out).unwrap()
}

// ==================== Reader Tests ====================

#[test]
fn test_reader_uses_key_and_text_columns() {
    let input = "1,web,server crashed on login\n\
                 2,web,\"refund, please\"\n\
                 x,web,bad key\n\
                 3,web\n";
    let records = RecordReader::default().read(input.as_bytes()).unwrap();

    assert_eq!(
        records.records,
        vec![
            (1, "server crashed on login".to_string()),
            (2, "refund, please".to_string()),
        ]
    );
    assert_eq!(records.skipped, 2);
}

#[test]
fn test_reader_custom_layout_with_headers() {
    let input = "id;body\n10;printer jammed again\n11;keyboard lights flicker\n";
    let reader = RecordReader {
        key_column: 0,
        text_column: 1,
        delimiter: b';',
        has_headers: true,
    };
    let records = reader.read(input.as_bytes()).unwrap();
    let keys: Vec<u64> = records.records.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![10, 11]);
    assert_eq!(records.skipped, 0);
}

#[test]
fn test_reader_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "7,mail,password reset email missing").unwrap();
    let records = RecordReader::default().read_path(file.path()).unwrap();
    assert_eq!(records.records.len(), 1);
    assert_eq!(records.records[0].0, 7);
}

#[test]
fn test_reader_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = RecordReader::default().read_path(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(GroupError::Io(_))));
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = ClusterConfig::default();
    assert_eq!(config.sim_threshold, DEFAULT_SIM_THRESHOLD);
    assert_eq!(config.sim_threshold, 5.0);
    assert_eq!(config.min_document_length, DEFAULT_MIN_DOCUMENT_LENGTH);
    assert_eq!(config.min_document_length, 3);
    assert!(config.tokenizer.stemming);
}

#[test]
fn test_config_partial_toml() {
    let config = ClusterConfig::from_toml_str("sim_threshold = 0.5").unwrap();
    assert_eq!(config.sim_threshold, 0.5);
    assert_eq!(config.min_document_length, 3);

    let config = ClusterConfig::from_toml_str(
        "min_document_length = 4\n[tokenizer]\nextra_stop_words = [\"please\"]\nstemming = false\n",
    )
    .unwrap();
    assert_eq!(config.min_document_length, 4);
    assert_eq!(config.tokenizer.extra_stop_words, vec!["please"]);
    assert!(!config.tokenizer.stemming);
}

#[test]
fn test_config_rejects_unknown_and_non_finite() {
    assert!(matches!(
        ClusterConfig::from_toml_str("threshold = 1.0"),
        Err(GroupError::Config(_))
    ));
    assert!(matches!(
        ClusterConfig::from_toml_str("sim_threshold = nan"),
        Err(GroupError::InvalidParameter { name: "sim_threshold", .. })
    ));
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sim_threshold = 2.5").unwrap();
    let config = ClusterConfig::load(file.path()).unwrap();
    assert_eq!(config.sim_threshold, 2.5);
}

#[test]
fn test_config_drives_corpus_filtering() {
    let config = ClusterConfig::from_toml_str(
        "min_document_length = 2\n[tokenizer]\nextra_stop_words = [\"please\"]\n",
    )
    .unwrap();
    let mut corpus: Corpus<u64> = Corpus::from_config(&config);
    corpus.load(1, "please refund payment");
    corpus.load(2, "please refund");
    assert!(corpus.contains(&1));
    assert!(!corpus.contains(&2));
}

// ==================== Report Tests ====================

#[test]
fn test_text_report_hides_singletons() {
    let text = render_to_string(ReportOptions::default());
    assert_eq!(
        text,
        "* server crashed on login (1)\n   *  0.120113:  server crashes during login\n"
    );
}

#[test]
fn test_text_report_with_singletons() {
    let options = ReportOptions {
        format: ReportFormat::Text,
        include_singletons: true,
    };
    let text = render_to_string(options);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "* refund requested for payment (0)");
}

#[test]
fn test_json_report() {
    let options = ReportOptions {
        format: ReportFormat::Json,
        include_singletons: false,
    };
    let text = render_to_string(options);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let groups = value.as_array().unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["anchor"], 1);
    assert_eq!(groups[0]["text"], "server crashed on login");
    assert_eq!(groups[0]["members"][0]["key"], 2);
    assert!(groups[0]["members"][0]["score"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_report_of_empty_result() {
    let mut corpus: Corpus<u64> = Corpus::new();
    let clusters = ClusterEngine::default().cluster(&mut corpus);
    let mut out = Vec::new();
    render(&mut out, &corpus, &clusters, ReportOptions::default()).unwrap();
    assert!(out.is_empty());
}
