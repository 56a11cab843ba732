//! Predictor feature selection

use polars::prelude::*;
use tracing::debug;

/// Fixed base list of numeric, area, and derived feature names.
pub const BASE_FEATURES: [&str; 10] = [
    "LotArea",
    "OverallQual",
    "OverallCond",
    "YearBuilt",
    "YearRemodAdd",
    "age_in_year",
    "years_from_remodel",
    "TotalBsmtSF",
    "1stFlrSF",
    "2ndFlrSF",
];

/// Compute the ordered list of predictor column names.
///
/// Starts from [`BASE_FEATURES`], then for each nominal group (in request
/// order) appends every column of the frame whose name starts with
/// `<group>_` — re-deriving the one-hot output names by the encoder's naming
/// convention. For each quantitative group it appends `<group>_score` by name
/// construction alone; existence validation is the consumer's responsibility.
///
/// No deduplication is performed; callers supply non-overlapping group names.
pub fn select_features(
    df: &DataFrame,
    nominal_groups: &[String],
    quantitative_groups: &[String],
) -> Vec<String> {
    let mut features: Vec<String> = BASE_FEATURES.iter().map(|s| s.to_string()).collect();

    for group in nominal_groups {
        let prefix = format!("{}_", group);
        for name in df.get_column_names() {
            if name.starts_with(&prefix) {
                features.push(name.to_string());
            }
        }
    }

    for group in quantitative_groups {
        features.push(format!("{}_score", group));
    }

    debug!(n_features = features.len(), "selected predictor features");
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_features_only() {
        let df = df!("LotArea" => &[8450i64]).unwrap();
        let features = select_features(&df, &[], &[]);
        assert_eq!(features, BASE_FEATURES.map(String::from).to_vec());
    }

    #[test]
    fn test_nominal_and_quantitative_groups() {
        let df = df!(
            "LotArea" => &[8450i64, 9600],
            "Neighborhood_NAmes" => &[1i32, 0],
            "Neighborhood_Edwards" => &[0i32, 1],
            "ExterQual" => &["Gd", "TA"],
        )
        .unwrap();

        let features = select_features(
            &df,
            &["Neighborhood".to_string()],
            &["ExterQual".to_string()],
        );

        // Base list, then indicator columns for the group, then the score name.
        assert_eq!(features.len(), BASE_FEATURES.len() + 2 + 1);
        assert!(features.contains(&"Neighborhood_NAmes".to_string()));
        assert!(features.contains(&"Neighborhood_Edwards".to_string()));
        assert_eq!(features.last().unwrap(), "ExterQual_score");
    }

    #[test]
    fn test_score_name_appended_without_existence_check() {
        let df = df!("LotArea" => &[8450i64]).unwrap();
        let features = select_features(&df, &[], &["Utilities".to_string()]);
        assert_eq!(features.last().unwrap(), "Utilities_score");
        assert!(df.column("Utilities_score").is_err());
    }

    #[test]
    fn test_prefix_match_not_containment() {
        // A column that contains but does not start with the group prefix
        // must not be selected.
        let df = df!(
            "full_MSZoning_RL" => &[1i32],
            "MSZoning_RL" => &[1i32],
        )
        .unwrap();

        let features = select_features(&df, &["MSZoning".to_string()], &[]);
        assert!(features.contains(&"MSZoning_RL".to_string()));
        assert!(!features.contains(&"full_MSZoning_RL".to_string()));
    }
}
