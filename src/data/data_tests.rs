use super::*;

fn biscuit_frame() -> DataFrame {
    DataFrame::new(vec![
        (
            "t".to_string(),
            Column::Numeric(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        ),
        (
            "L".to_string(),
            Column::Numeric(vec![0.002, 0.003, 0.004, 0.0025, 0.0035, 0.0045]),
        ),
        (
            "dL".to_string(),
            Column::Numeric(vec![1e-4; 6]),
        ),
        (
            "biscuit".to_string(),
            Column::Categorical(vec![
                "digestive".to_string(),
                "digestive".to_string(),
                "digestive".to_string(),
                "hobnob".to_string(),
                "hobnob".to_string(),
                "hobnob".to_string(),
            ]),
        ),
    ])
    .expect("valid frame")
}

#[test]
fn test_frame_shape() {
    let df = biscuit_frame();
    assert_eq!(df.shape(), (6, 4));
    assert_eq!(df.n_rows(), 6);
    assert_eq!(df.n_cols(), 4);
    assert_eq!(df.column_names(), vec!["t", "L", "dL", "biscuit"]);
}

#[test]
fn test_frame_rejects_empty() {
    assert!(DataFrame::new(vec![]).is_err());
}

#[test]
fn test_frame_rejects_unequal_lengths() {
    let result = DataFrame::new(vec![
        ("a".to_string(), Column::Numeric(vec![1.0, 2.0])),
        ("b".to_string(), Column::Numeric(vec![1.0])),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_frame_rejects_duplicate_names() {
    let result = DataFrame::new(vec![
        ("a".to_string(), Column::Numeric(vec![1.0])),
        ("a".to_string(), Column::Numeric(vec![2.0])),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_frame_rejects_empty_name() {
    let result = DataFrame::new(vec![(String::new(), Column::Numeric(vec![1.0]))]);
    assert!(result.is_err());
}

#[test]
fn test_column_missing() {
    let df = biscuit_frame();
    let err = df.column("dunk_count").unwrap_err();
    assert!(matches!(err, RemojoError::MissingColumn { .. }));
}

#[test]
fn test_numeric_type_mismatch() {
    let df = biscuit_frame();
    let err = df.numeric("biscuit").unwrap_err();
    assert!(matches!(err, RemojoError::InputType { .. }));
    let err = df.categorical("t").unwrap_err();
    assert!(matches!(err, RemojoError::InputType { .. }));
}

#[test]
fn test_add_and_drop_column() {
    let mut df = biscuit_frame();
    df.add_column("weight".to_string(), Column::Numeric(vec![0.01; 6]))
        .unwrap();
    assert_eq!(df.n_cols(), 5);

    // Duplicate name and wrong length both rejected
    assert!(df
        .add_column("weight".to_string(), Column::Numeric(vec![0.01; 6]))
        .is_err());
    assert!(df
        .add_column("bad".to_string(), Column::Numeric(vec![0.01; 2]))
        .is_err());

    df.drop_column("weight").unwrap();
    assert_eq!(df.n_cols(), 4);
    assert!(matches!(
        df.drop_column("weight").unwrap_err(),
        RemojoError::MissingColumn { .. }
    ));
}

#[test]
fn test_encode_category_codes_by_ordering_position() {
    let mut df = DataFrame::new(vec![(
        "biscuit".to_string(),
        Column::Categorical(vec![
            "digestive".to_string(),
            "rich_tea".to_string(),
            "hobnob".to_string(),
        ]),
    )])
    .unwrap();

    df.encode_category("biscuit", &["rich_tea", "digestive", "hobnob"])
        .unwrap();

    assert_eq!(df.numeric("encoded biscuit").unwrap(), &[1.0, 0.0, 2.0]);
}

#[test]
fn test_encode_category_round_trip() {
    let ordering = ["rich_tea", "digestive", "hobnob"];
    let mut df = biscuit_frame();
    df.encode_category("biscuit", &ordering).unwrap();

    let codes = df.numeric("encoded biscuit").unwrap();
    let labels = df.categorical("biscuit").unwrap();
    for (code, label) in codes.iter().zip(labels) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let decoded = ordering[*code as usize];
        assert_eq!(decoded, label);
    }
}

#[test]
fn test_encode_category_missing_column() {
    let mut df = biscuit_frame();
    let err = df.encode_category("flavour", &["rich_tea"]).unwrap_err();
    assert!(matches!(err, RemojoError::MissingColumn { .. }));
}

#[test]
fn test_encode_category_unknown_label_is_rejected() {
    let mut df = biscuit_frame();
    // "digestive" rows have no code under this ordering; must not default to 0
    let err = df.encode_category("biscuit", &["hobnob"]).unwrap_err();
    match err {
        RemojoError::UnknownCategory { column, label } => {
            assert_eq!(column, "biscuit");
            assert_eq!(label, "digestive");
        }
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
    // Failed encoding must not leave a partial column behind
    assert!(df.column("encoded biscuit").is_err());
}

#[test]
fn test_observations_valid() {
    let obs = Observations::new(
        vec![1.0, 2.0, 3.0],
        vec![0.002, 0.003, 0.004],
        vec![1e-4, 1e-4, 1e-4],
    )
    .unwrap();
    assert_eq!(obs.len(), 3);
    assert!(!obs.is_empty());
    assert_eq!(obs.t(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_observations_reject_empty() {
    let err = Observations::new(vec![], vec![], vec![]).unwrap_err();
    assert!(matches!(err, RemojoError::InputType { .. }));
}

#[test]
fn test_observations_reject_unequal_lengths() {
    let err = Observations::new(vec![1.0, 2.0], vec![0.1], vec![1e-4, 1e-4]).unwrap_err();
    assert!(matches!(err, RemojoError::ShapeMismatch { .. }));
}

#[test]
fn test_observations_reject_nonpositive_uncertainty() {
    let err = Observations::new(vec![1.0], vec![0.1], vec![0.0]).unwrap_err();
    assert!(matches!(err, RemojoError::InvalidParameter { .. }));
    let err = Observations::new(vec![1.0], vec![0.1], vec![-1e-4]).unwrap_err();
    assert!(matches!(err, RemojoError::InvalidParameter { .. }));
}

#[test]
fn test_observations_reject_negative_time() {
    let err = Observations::new(vec![-1.0], vec![0.1], vec![1e-4]).unwrap_err();
    assert!(matches!(err, RemojoError::InvalidParameter { .. }));
}

#[test]
fn test_observations_reject_nonfinite() {
    let err = Observations::new(vec![1.0], vec![f64::NAN], vec![1e-4]).unwrap_err();
    assert!(matches!(err, RemojoError::InvalidParameter { .. }));
}

#[test]
fn test_observations_from_frame() {
    let df = biscuit_frame();
    let obs = Observations::from_frame(&df, "t", "L", "dL").unwrap();
    assert_eq!(obs.len(), 6);

    let err = Observations::from_frame(&df, "time", "L", "dL").unwrap_err();
    assert!(matches!(err, RemojoError::MissingColumn { .. }));
}

#[test]
fn test_observations_from_frame_filtered() {
    let df = biscuit_frame();
    let obs =
        Observations::from_frame_filtered(&df, "t", "L", "dL", "biscuit", "hobnob").unwrap();
    assert_eq!(obs.len(), 3);
    assert_eq!(obs.t(), &[4.0, 5.0, 6.0]);

    let err = Observations::from_frame_filtered(&df, "t", "L", "dL", "biscuit", "bourbon")
        .unwrap_err();
    assert!(matches!(err, RemojoError::UnknownCategory { .. }));
}

#[test]
fn test_summary_table_lookup() {
    let mut table = SummaryTable::new();
    table
        .push(SampleSummary {
            label: "digestive".to_string(),
            mean: 7.1e-7,
            std: 5.0e-8,
        })
        .unwrap();
    table
        .push(SampleSummary {
            label: "hobnob".to_string(),
            mean: 8.4e-7,
            std: 6.0e-8,
        })
        .unwrap();

    assert_eq!(table.len(), 2);
    let digestive = table.get("digestive").expect("summary present");
    assert!((digestive.mean - 7.1e-7).abs() < 1e-15);
    assert!(table.get("bourbon").is_none());
}

#[test]
fn test_summary_table_rejects_invalid() {
    let mut table = SummaryTable::new();
    assert!(table
        .push(SampleSummary {
            label: "digestive".to_string(),
            mean: f64::NAN,
            std: 5.0e-8,
        })
        .is_err());
    assert!(table
        .push(SampleSummary {
            label: "digestive".to_string(),
            mean: 7.1e-7,
            std: 0.0,
        })
        .is_err());

    table
        .push(SampleSummary {
            label: "digestive".to_string(),
            mean: 7.1e-7,
            std: 5.0e-8,
        })
        .unwrap();
    // Second entry for the same label rejected
    assert!(table
        .push(SampleSummary {
            label: "digestive".to_string(),
            mean: 7.2e-7,
            std: 5.0e-8,
        })
        .is_err());
}
