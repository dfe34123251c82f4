//! Rate-table types for the take-home pay engine.
//!
//! Every table is plain immutable data deserialized from YAML. A new fiscal
//! year's rates replace the table directory wholesale; no engine code changes.
//! Band scans share one generic helper ([`find_band`]) where the first band whose
//! upper bound admits the value wins, and the last band is unbounded so
//! lookups clamp instead of failing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::Yen;

/// Metadata about the shipped table version.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// Human-readable name of the table set.
    pub name: String,
    /// The fiscal-year version of the rates (e.g. "reiwa7").
    pub version: String,
    /// URL to the official source documentation.
    pub source_url: String,
}

/// One prefecture with its Kyokai Kenpo health-insurance rate.
#[derive(Debug, Clone, Deserialize)]
pub struct Prefecture {
    /// JIS prefecture code ("01" through "47").
    pub code: String,
    /// Romanized prefecture name.
    pub name: String,
    /// Total health-insurance rate in percent (employer + employee).
    pub health_rate: Decimal,
    /// Representative latitude, for the geolocation collaborator.
    pub lat: Decimal,
    /// Representative longitude, for the geolocation collaborator.
    pub lng: Decimal,
}

/// One grade of a standard-remuneration table.
///
/// A salary in `[lower, upper)` maps to `standard`; the last grade leaves
/// `upper` unset and is unbounded.
#[derive(Debug, Clone, Deserialize)]
pub struct RemunerationGrade {
    /// Grade number (1-based, informational).
    pub grade: u32,
    /// The standardized monthly remuneration for this grade.
    pub standard: Yen,
    /// Inclusive lower salary bound.
    pub lower: Yen,
    /// Exclusive upper salary bound; `None` for the final grade.
    #[serde(default)]
    pub upper: Option<Yen>,
}

/// A government standard-remuneration table (health: 50 grades,
/// pension: 32 grades).
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct StandardRemunerationTable {
    /// Ordered grades, lowest first.
    pub grades: Vec<RemunerationGrade>,
}

impl StandardRemunerationTable {
    /// Looks up the standard remuneration for a salary.
    ///
    /// Half-open interval semantics: a salary exactly at a grade's `lower`
    /// bound maps to that grade. Non-positive salaries resolve to the first
    /// grade; salaries at or above the final grade's lower bound resolve to
    /// the last grade. Never fails.
    pub fn lookup(&self, salary: Yen) -> Yen {
        let salary = salary.max(0);
        for grade in &self.grades {
            let above_lower = salary >= grade.lower;
            let below_upper = grade.upper.is_none_or(|upper| salary < upper);
            if above_lower && below_upper {
                return grade.standard;
            }
        }
        self.grades.last().map(|g| g.standard).unwrap_or(0)
    }

    /// Returns the standard remuneration at an explicit grade index
    /// (0-based), or `None` when the index is out of range.
    pub fn by_index(&self, index: usize) -> Option<Yen> {
        self.grades.get(index).map(|g| g.standard)
    }
}

/// A table band bounded above by an optional inclusive threshold.
pub trait Band {
    /// The inclusive upper bound of this band; `None` means unbounded.
    fn upper(&self) -> Option<Yen>;
}

/// Returns the first band whose upper bound admits `value`.
///
/// Out-of-range high values resolve to the last band; tables start at zero,
/// so non-positive values resolve to the first band. Returns `None` only for
/// an empty table.
pub fn find_band<B: Band>(bands: &[B], value: Yen) -> Option<&B> {
    bands
        .iter()
        .find(|band| band.upper().is_none_or(|upper| value <= upper))
        .or_else(|| bands.last())
}

/// A salary-income-deduction band: amount = ⌊value × rate⌋ + offset.
///
/// Flat bands use a zero rate so the offset is the whole amount.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionBand {
    /// Inclusive upper bound on the input value; `None` for the top band.
    #[serde(default)]
    pub upper: Option<Yen>,
    /// Multiplicative fraction of the input value.
    pub rate: Decimal,
    /// Additive offset (may be negative).
    pub offset: Yen,
}

impl DeductionBand {
    /// Evaluates the band formula for a value.
    pub fn amount(&self, value: Yen) -> Yen {
        let scaled = (Decimal::from(value) * self.rate).floor();
        scaled.to_i64().unwrap_or(0) + self.offset
    }
}

impl Band for DeductionBand {
    fn upper(&self) -> Option<Yen> {
        self.upper
    }
}

/// A basic-deduction band: a flat amount keyed on employment income.
#[derive(Debug, Clone, Deserialize)]
pub struct BasicDeductionBand {
    /// Inclusive upper bound on employment income; `None` for the top band.
    #[serde(default)]
    pub upper: Option<Yen>,
    /// The deduction amount in this band.
    pub amount: Yen,
}

impl Band for BasicDeductionBand {
    fn upper(&self) -> Option<Yen> {
        self.upper
    }
}

/// A tax bracket: tax = ⌊taxable × rate − deduction⌋.
///
/// The subtractive deduction makes a single bracket equivalent to true
/// marginal accumulation at a fraction of the cost.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound on taxable income; `None` for the top bracket.
    #[serde(default)]
    pub upper: Option<Yen>,
    /// Marginal rate as a fraction (e.g. 0.05105).
    pub rate: Decimal,
    /// Subtractive deduction in yen.
    pub deduction: Yen,
}

impl Band for TaxBracket {
    fn upper(&self) -> Option<Yen> {
        self.upper
    }
}

/// A step region of the secondary-column calculation-base snapping table.
#[derive(Debug, Clone, Deserialize)]
pub struct StepBand {
    /// Inclusive upper bound of this region.
    pub upper: Yen,
    /// Step size within the region.
    pub step: Yen,
    /// The lowest boundary of the region's step grid.
    pub minimum: Yen,
}

impl Band for StepBand {
    fn upper(&self) -> Option<Yen> {
        Some(self.upper)
    }
}

/// Core social-insurance rates and caps.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRates {
    /// Total pension rate in percent (employee pays half).
    pub pension_rate: Decimal,
    /// Total nursing-care rate in percent (employee pays half).
    pub nursing_rate: Decimal,
    /// Default union health total rate in percent.
    pub union_health_rate: Decimal,
    /// Per-occurrence cap on the bonus amount for pension premiums.
    pub pension_bonus_cap: Yen,
}

/// Employee-share rate for one employment-insurance industry category.
#[derive(Debug, Clone, Deserialize)]
pub struct EmploymentCategoryRate {
    /// Employee-share rate in percent.
    pub rate: Decimal,
    /// Monthly earnings cap before the rate is applied. The current rate
    /// regime is uncapped; earlier regimes set this.
    #[serde(default)]
    pub monthly_earnings_cap: Option<Yen>,
}

/// Employment-insurance rates keyed by industry category.
#[derive(Debug, Clone, Deserialize)]
pub struct EmploymentInsuranceRates {
    /// General businesses.
    pub general: EmploymentCategoryRate,
    /// Agriculture, forestry, fisheries, and sake brewing.
    pub agriculture_or_sake: EmploymentCategoryRate,
    /// Construction businesses.
    pub construction: EmploymentCategoryRate,
}

/// Tables for the secondary-employment ("otsu" column) differential method.
///
/// Every boundary constant here is reverse-engineered from the official
/// reference table and refreshed yearly as data, never hardcoded.
#[derive(Debug, Clone, Deserialize)]
pub struct SecondaryTaxTables {
    /// Exclusive ceiling of the flat-rate range.
    pub flat_ceiling: Yen,
    /// Flat proportional rate below the ceiling.
    pub flat_rate: Decimal,
    /// Inclusive ceiling of the banded (snapping) range.
    pub banded_ceiling: Yen,
    /// Step regions for snapping to a calculation base amount.
    pub steps: Vec<StepBand>,
    /// Salary-income-deduction table for the inner formula.
    pub salary_deduction: Vec<DeductionBand>,
    /// Fixed basic deduction for the inner formula.
    pub basic_deduction: Yen,
    /// Base tax brackets without the reconstruction surtax baked in.
    pub base_brackets: Vec<TaxBracket>,
    /// Reconstruction surtax factor applied to the differential.
    pub surtax_factor: Decimal,
    /// Inclusive ceiling of the third range.
    pub mid_ceiling: Yen,
    /// Fixed base amount of the third range.
    pub mid_base: Yen,
    /// Marginal rate of the third range.
    pub mid_rate: Decimal,
    /// Fixed base amount of the fourth range.
    pub top_base: Yen,
    /// Marginal rate of the fourth range.
    pub top_rate: Decimal,
}

/// Tables for monthly withholding income tax.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingTables {
    /// Monthly salary-income-deduction bands (primary column).
    pub salary_deduction: Vec<DeductionBand>,
    /// Monthly basic-deduction bands keyed on employment income.
    pub basic_deduction: Vec<BasicDeductionBand>,
    /// Monthly tax brackets with the reconstruction surtax baked in.
    pub brackets: Vec<TaxBracket>,
    /// Monthly deduction per dependent.
    pub dependent_deduction: Yen,
    /// Flat non-resident rate as a fraction (e.g. 0.2042).
    pub non_resident_rate: Decimal,
    /// Secondary-column tables.
    pub secondary: SecondaryTaxTables,
}

/// Tables for the simplified resident-tax approximation.
#[derive(Debug, Clone, Deserialize)]
pub struct ResidentTaxTables {
    /// Flat resident-tax rate in percent.
    pub rate: Decimal,
    /// Flat annual per-capita levy in yen.
    pub per_capita_levy: Yen,
    /// Annual basic deduction in yen.
    pub basic_deduction: Yen,
    /// Annual salary-income-deduction bands.
    pub salary_deduction: Vec<DeductionBand>,
}

/// Allowance treatment rules.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceRules {
    /// Per-item monthly ceiling on tax-exempt commute allowances.
    pub commute_tax_free_cap: Yen,
}

/// The complete set of rate tables consumed by the engine.
///
/// Constructed by [`ConfigLoader`](super::ConfigLoader) from a table
/// directory, or assembled directly in tests with substitute data.
#[derive(Debug, Clone)]
pub struct RateTables {
    /// Table-version metadata.
    pub metadata: TableMetadata,
    /// The 47 prefectures with their health rates.
    pub prefectures: Vec<Prefecture>,
    /// Fallback prefecture index for out-of-range jurisdictions.
    pub default_jurisdiction: usize,
    /// Health-insurance standard-remuneration table.
    pub health_grades: StandardRemunerationTable,
    /// Pension standard-remuneration table.
    pub pension_grades: StandardRemunerationTable,
    /// Core insurance rates.
    pub insurance: InsuranceRates,
    /// Employment-insurance rates.
    pub employment: EmploymentInsuranceRates,
    /// Withholding-tax tables.
    pub withholding: WithholdingTables,
    /// Resident-tax tables.
    pub resident: ResidentTaxTables,
    /// Allowance treatment rules.
    pub allowances: AllowanceRules,
}

impl RateTables {
    /// Returns the prefecture for a jurisdiction index, falling back to the
    /// default jurisdiction (and then the first entry) when out of range.
    pub fn prefecture(&self, jurisdiction: usize) -> Option<&Prefecture> {
        self.prefectures
            .get(jurisdiction)
            .or_else(|| self.prefectures.get(self.default_jurisdiction))
            .or_else(|| self.prefectures.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn small_grade_table() -> StandardRemunerationTable {
        StandardRemunerationTable {
            grades: vec![
                RemunerationGrade {
                    grade: 1,
                    standard: 58_000,
                    lower: 0,
                    upper: Some(63_000),
                },
                RemunerationGrade {
                    grade: 2,
                    standard: 68_000,
                    lower: 63_000,
                    upper: Some(73_000),
                },
                RemunerationGrade {
                    grade: 3,
                    standard: 78_000,
                    lower: 73_000,
                    upper: None,
                },
            ],
        }
    }

    /// RT-001: a salary at a grade's lower bound maps to that grade.
    #[test]
    fn test_lookup_lower_bound_is_inclusive() {
        let table = small_grade_table();
        assert_eq!(table.lookup(63_000), 68_000);
        assert_eq!(table.lookup(62_999), 58_000);
    }

    /// RT-002: high salaries clamp to the last grade.
    #[test]
    fn test_lookup_clamps_high_salaries() {
        let table = small_grade_table();
        assert_eq!(table.lookup(5_000_000), 78_000);
    }

    /// RT-003: non-positive salaries resolve to the first grade.
    #[test]
    fn test_lookup_clamps_non_positive_salaries() {
        let table = small_grade_table();
        assert_eq!(table.lookup(0), 58_000);
        assert_eq!(table.lookup(-10_000), 58_000);
    }

    #[test]
    fn test_by_index_in_and_out_of_range() {
        let table = small_grade_table();
        assert_eq!(table.by_index(1), Some(68_000));
        assert_eq!(table.by_index(99), None);
    }

    #[test]
    fn test_find_band_picks_first_admitting_band() {
        let bands = vec![
            BasicDeductionBand {
                upper: Some(100),
                amount: 1,
            },
            BasicDeductionBand {
                upper: Some(200),
                amount: 2,
            },
            BasicDeductionBand {
                upper: None,
                amount: 3,
            },
        ];

        assert_eq!(find_band(&bands, 100).unwrap().amount, 1);
        assert_eq!(find_band(&bands, 101).unwrap().amount, 2);
        assert_eq!(find_band(&bands, 10_000).unwrap().amount, 3);
        assert_eq!(find_band(&bands, -5).unwrap().amount, 1);
    }

    #[test]
    fn test_find_band_on_empty_table() {
        let bands: Vec<TaxBracket> = vec![];
        assert!(find_band(&bands, 100).is_none());
    }

    #[test]
    fn test_deduction_band_flat_and_formula() {
        let flat = DeductionBand {
            upper: Some(135_416),
            rate: Decimal::ZERO,
            offset: 45_834,
        };
        assert_eq!(flat.amount(100_000), 45_834);

        let formula = DeductionBand {
            upper: Some(149_999),
            rate: dec("0.40"),
            offset: -8_333,
        };
        // floor(140_000 * 0.40) - 8_333
        assert_eq!(formula.amount(140_000), 47_667);
    }

    #[test]
    fn test_prefecture_fallback() {
        let tables = RateTables {
            metadata: TableMetadata {
                name: "test".to_string(),
                version: "test".to_string(),
                source_url: "https://example.com".to_string(),
            },
            prefectures: vec![
                Prefecture {
                    code: "01".to_string(),
                    name: "Hokkaido".to_string(),
                    health_rate: dec("10.29"),
                    lat: dec("43.06"),
                    lng: dec("141.35"),
                },
                Prefecture {
                    code: "13".to_string(),
                    name: "Tokyo".to_string(),
                    health_rate: dec("9.91"),
                    lat: dec("35.69"),
                    lng: dec("139.69"),
                },
            ],
            default_jurisdiction: 1,
            health_grades: small_grade_table(),
            pension_grades: small_grade_table(),
            insurance: InsuranceRates {
                pension_rate: dec("18.3"),
                nursing_rate: dec("1.82"),
                union_health_rate: dec("9.50"),
                pension_bonus_cap: 1_500_000,
            },
            employment: EmploymentInsuranceRates {
                general: EmploymentCategoryRate {
                    rate: dec("0.55"),
                    monthly_earnings_cap: None,
                },
                agriculture_or_sake: EmploymentCategoryRate {
                    rate: dec("0.65"),
                    monthly_earnings_cap: None,
                },
                construction: EmploymentCategoryRate {
                    rate: dec("0.65"),
                    monthly_earnings_cap: None,
                },
            },
            withholding: WithholdingTables {
                salary_deduction: vec![],
                basic_deduction: vec![],
                brackets: vec![],
                dependent_deduction: 31_667,
                non_resident_rate: dec("0.2042"),
                secondary: SecondaryTaxTables {
                    flat_ceiling: 105_000,
                    flat_rate: dec("0.03063"),
                    banded_ceiling: 740_000,
                    steps: vec![],
                    salary_deduction: vec![],
                    basic_deduction: 48_334,
                    base_brackets: vec![],
                    surtax_factor: dec("1.021"),
                    mid_ceiling: 1_710_000,
                    mid_base: 259_200,
                    mid_rate: dec("0.4084"),
                    top_base: 655_400,
                    top_rate: dec("0.45945"),
                },
            },
            resident: ResidentTaxTables {
                rate: dec("10"),
                per_capita_levy: 5_000,
                basic_deduction: 480_000,
                salary_deduction: vec![],
            },
            allowances: AllowanceRules {
                commute_tax_free_cap: 150_000,
            },
        };

        assert_eq!(tables.prefecture(0).unwrap().name, "Hokkaido");
        // Out of range falls back to the default jurisdiction.
        assert_eq!(tables.prefecture(99).unwrap().name, "Tokyo");
    }
}
