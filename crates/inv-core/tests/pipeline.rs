//! End-to-end tests for record cleaning and anomaly aggregation.

use inv_core::{
    CleaningContext, Prompts, build_anomaly_record, clean_record, clean_records,
    collect_anomalies, process_fqdn, process_hostname, process_ipv4, process_mac, process_site,
};
use inv_extract::{DisabledExtractor, Extractor, Fields};
use inv_model::{CleaningOptions, FieldName, FqdnOptions, RawRecord};

/// Answers owner prompts with a fixed owner and device prompts with a switch.
struct Fixed;

impl Extractor for Fixed {
    fn extract(&self, _system_prompt: &str, user_prompt: &str) -> inv_extract::Result<Fields> {
        let pairs: &[(&str, &str)] = if user_prompt.contains("Device Type:") {
            &[("device_out", "switch"), ("device_type_confidence", "high")]
        } else {
            &[
                ("owner_out", "Ana Lima"),
                ("owner_email", "ana@corp.example"),
                ("owner_team", "NetOps"),
            ]
        };
        Ok(pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn record(row: usize, cells: &[(&str, &str)]) -> RawRecord {
    RawRecord::from_pairs(row, cells.iter().copied())
}

fn clean_row() -> RawRecord {
    record(
        0,
        &[
            ("ip", "192.168.1.10"),
            ("mac", "AA-BB-CC-DD-EE-FF"),
            ("site", "HQ_Bldg 2"),
            ("hostname", "Core-SW1"),
            ("fqdn", "core-sw1.corp.example."),
            ("owner", "ana lima"),
            ("device_type", "switch"),
            ("notes", "rack 4"),
        ],
    )
}

fn dirty_row() -> RawRecord {
    record(
        1,
        &[
            ("ip", "10.0.0.300"),
            ("mac", "zz:bb:cc:dd:ee:ff"),
            ("site", ""),
            ("hostname", "bad_host"),
            ("fqdn", "a..b"),
            ("owner", ""),
            ("device_type", ""),
            ("notes", ""),
        ],
    )
}

#[test]
fn clean_row_has_no_anomalies() {
    let prompts = Prompts::default();
    let context = CleaningContext::new(&Fixed, &prompts);
    let enriched = clean_record(&clean_row(), &context);

    assert!(!enriched.has_issues());
    assert_eq!(enriched.ip.outcome.canonical_value(), "192.168.1.10");
    assert_eq!(enriched.ip.subnet, "192.168.1.10/24");
    assert_eq!(enriched.mac.canonical_value(), "aa:bb:cc:dd:ee:ff");
    assert_eq!(enriched.site.canonical_value(), "Headquarters-Building-2");
    assert_eq!(enriched.fqdn.kind(), "absolute_fqdn");
    assert_eq!(enriched.owner.team, "NetOps");
    assert_eq!(enriched.device.type_confidence, "high");

    let anomaly = build_anomaly_record(&enriched);
    assert!(anomaly.issues.is_empty());
    assert!(anomaly.recommended_actions.is_empty());
}

#[test]
fn dirty_row_reports_every_field_in_order() {
    let prompts = Prompts::default();
    let context = CleaningContext::new(&DisabledExtractor, &prompts);
    let enriched = clean_record(&dirty_row(), &context);
    let anomaly = build_anomaly_record(&enriched);

    let fields: Vec<&str> = anomaly.issues.iter().map(|issue| issue.field.as_str()).collect();
    assert_eq!(
        fields,
        ["ip", "mac", "site", "hostname", "fqdn", "owner", "device"]
    );
    let types: Vec<&str> = anomaly
        .issues
        .iter()
        .map(|issue| issue.issue_type.as_str())
        .collect();
    assert_eq!(
        types,
        [
            "octet_out_of_range",
            "bad_octet_hex",
            "missing_site",
            "invalid_characters",
            "empty_label_in_sequence",
            "Missing owner fields",
            "Missing device fields",
        ]
    );
    assert_eq!(anomaly.recommended_actions.len(), anomaly.issues.len());
    assert_eq!(anomaly.issues[0].value, "10.0.0.300");
}

#[test]
fn anomaly_json_shape() {
    let prompts = Prompts::default();
    let context = CleaningContext::new(&Fixed, &prompts);
    let base = clean_row();
    let row = RawRecord::new(
        "inv-7",
        base.values()
            .iter()
            .map(|(column, value)| {
                let value = if column == "mac" { "" } else { value.as_str() };
                (column.clone(), value.to_string())
            })
            .collect(),
    );
    let anomaly = build_anomaly_record(&clean_record(&row, &context));
    let json = serde_json::to_value(&anomaly).unwrap();
    insta::assert_json_snapshot!(json, @r#"
    {
      "issues": [
        {
          "field": "mac",
          "type": "empty_string",
          "value": ""
        }
      ],
      "recommended_actions": [
        "Correct MAC or mark record for revision"
      ],
      "source_row_id": "inv-7"
    }
    "#);
}

#[test]
fn aggregator_matches_outcomes() {
    let prompts = Prompts::default();
    let context = CleaningContext::new(&DisabledExtractor, &prompts);
    let records = clean_records(&[clean_row(), dirty_row()], &context);
    for (enriched, anomaly) in records.iter().zip(collect_anomalies(&records)) {
        let invalid: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|field| !enriched.outcome(*field).is_valid())
            .collect();
        assert_eq!(anomaly.issue_count(), invalid.len());
        for (issue, field) in anomaly.issues.iter().zip(&invalid) {
            assert_eq!(issue.field, field.as_str());
        }
    }
}

#[test]
fn parallel_cleaning_keeps_input_order() {
    let prompts = Prompts::default();
    let context = CleaningContext::new(&DisabledExtractor, &prompts);
    let rows: Vec<RawRecord> = (0..200)
        .map(|row| {
            let ip = format!("10.0.{}.{}", row / 256, row % 256);
            record(row, &[("ip", ip.as_str())])
        })
        .collect();
    let cleaned = clean_records(&rows, &context);
    assert_eq!(cleaned.len(), rows.len());
    for (row, enriched) in cleaned.iter().enumerate() {
        assert_eq!(enriched.row_id().to_string(), row.to_string());
        assert_eq!(
            enriched.ip.outcome.canonical_value(),
            format!("10.0.{}.{}", row / 256, row % 256)
        );
    }
}

#[test]
fn processors_are_idempotent_on_canonical_output() {
    let ip = process_ipv4(Some("010.001.002.003"));
    let again = process_ipv4(Some(ip.outcome.canonical_value()));
    assert_eq!(ip.outcome.canonical_value(), again.outcome.canonical_value());

    let mac = process_mac(Some("AABBCCDDEEFF"));
    assert_eq!(process_mac(Some(mac.canonical_value())), mac);

    let site = process_site(Some("blr dc_lab"));
    assert_eq!(process_site(Some(site.canonical_value())), site);

    let host = process_hostname(Some("EDGE-01"), false);
    assert_eq!(process_hostname(Some(host.canonical_value()), false), host);

    let fqdn = process_fqdn(Some("Edge-01.Corp.Example"), FqdnOptions::default());
    assert_eq!(
        process_fqdn(Some(fqdn.canonical_value()), FqdnOptions::default()),
        fqdn
    );
}

#[test]
fn options_flow_into_processors() {
    let prompts = Prompts::default();
    let options = CleaningOptions::new()
        .with_hostname_allow_underscore(true)
        .with_fqdn(FqdnOptions::strict());
    let context = CleaningContext::new(&DisabledExtractor, &prompts).with_options(options);
    let row = record(3, &[("hostname", "edge_01"), ("fqdn", "localhost")]);
    let enriched = clean_record(&row, &context);
    assert!(enriched.hostname.is_valid());
    assert_eq!(
        enriched.fqdn.issue().map(|code| code.as_str()),
        Some("requires_at_least_two_labels")
    );
}

#[test]
fn attributes_flatten_in_processing_order() {
    let prompts = Prompts::default();
    let context = CleaningContext::new(&Fixed, &prompts);
    let enriched = clean_record(&clean_row(), &context);
    let keys: Vec<String> = enriched
        .attributes()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys.first().map(String::as_str), Some("ip_out"));
    assert!(keys.contains(&"subnet_cidr".to_string()));
    let position = |key: &str| keys.iter().position(|k| k == key).unwrap();
    assert!(position("mac_kind") < position("site_out"));
    assert!(position("site_out") < position("hostname_out"));
    assert!(position("owner_team") < position("device_out"));
    assert_eq!(keys.last().map(String::as_str), Some("device_normalization_steps"));
    assert!(enriched.normalization_steps().starts_with("ip_trim|ip_parse"));
}
