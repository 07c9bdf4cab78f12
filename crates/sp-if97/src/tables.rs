//! Embedded coefficient tables.
//!
//! Every region's numerical coefficients ship as text resources compiled
//! into the binary. The source corpus mixes comma- and semicolon-separated
//! files, so the parser accepts both, trims whitespace, skips a header row
//! when the first line is not numeric, and treats an empty exponent field
//! as zero (the Region 3 ln-δ term has no exponents).
//!
//! Tables are parsed exactly once and published through a `OnceLock`; after
//! that they are immutable and may be read from any number of threads.

use crate::error::{If97Error, If97Result};
use std::sync::OnceLock;

/// One term of a Gibbs/Helmholtz residual series: N · x^I · y^J.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Term {
    pub i: i32,
    pub j: i32,
    pub n: f64,
}

/// One term of an ideal-gas series: N · τ^J.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdealTerm {
    pub j: i32,
    pub n: f64,
}

#[derive(Debug)]
pub(crate) struct Tables {
    pub region1: Vec<Term>,
    pub region2_ideal: Vec<IdealTerm>,
    pub region2_residual: Vec<Term>,
    /// Index 0 is the ln-δ coefficient; its exponents are unused.
    pub region3: Vec<Term>,
    /// 1-based n₁..n₁₀ of the saturation equation.
    pub region4: [f64; 11],
    pub region5_ideal: Vec<IdealTerm>,
    pub region5_residual: Vec<Term>,
    /// 1-based; only n₁..n₃ of the B23 quadratic are used.
    pub b23: [f64; 4],
    /// 1-based coefficients of the h_3ab(p) cubic.
    pub h3ab: [f64; 5],
    pub t3a_ph: Vec<Term>,
    pub t3b_ph: Vec<Term>,
    pub v3a_ph: Vec<Term>,
    pub v3b_ph: Vec<Term>,
    pub t3a_ps: Vec<Term>,
    pub t3b_ps: Vec<Term>,
    pub v3a_ps: Vec<Term>,
    pub v3b_ps: Vec<Term>,
    pub p3a_hs: Vec<Term>,
    pub p3b_hs: Vec<Term>,
}

/// Split one record on comma or semicolon and trim each field.
fn fields(line: &str) -> Vec<&str> {
    line.split(|c| c == ',' || c == ';')
        .map(str::trim)
        .collect()
}

/// Parse fixed-arity numeric records. An empty field parses as zero. The
/// first line is skipped when any of its fields fails to parse as numeric.
fn parse_rows(name: &'static str, text: &str, arity: usize) -> If97Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let parts = fields(line);
        if parts.len() != arity {
            if lineno == 0 {
                continue; // header with different shape
            }
            return Err(If97Error::Table {
                name,
                what: format!("line {}: expected {} fields, got {}", lineno + 1, arity, parts.len()),
            });
        }
        let mut row = Vec::with_capacity(arity);
        let mut numeric = true;
        for part in &parts {
            if part.is_empty() {
                row.push(0.0);
                continue;
            }
            match part.parse::<f64>() {
                Ok(v) => row.push(v),
                Err(_) => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric {
            if lineno == 0 {
                continue; // header row
            }
            return Err(If97Error::Table {
                name,
                what: format!("line {}: non-numeric field", lineno + 1),
            });
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(If97Error::Table {
            name,
            what: "no data rows".into(),
        });
    }
    Ok(rows)
}

fn as_exponent(name: &'static str, v: f64) -> If97Result<i32> {
    if v.fract() != 0.0 || v.abs() > i32::MAX as f64 {
        return Err(If97Error::Table {
            name,
            what: format!("exponent {v} is not an integer"),
        });
    }
    Ok(v as i32)
}

/// Rows of (row#, I, J, N).
fn parse_terms(name: &'static str, text: &str) -> If97Result<Vec<Term>> {
    parse_rows(name, text, 4)?
        .into_iter()
        .map(|r| {
            Ok(Term {
                i: as_exponent(name, r[1])?,
                j: as_exponent(name, r[2])?,
                n: r[3],
            })
        })
        .collect()
}

/// Rows of (row#, J, N).
fn parse_ideal_terms(name: &'static str, text: &str) -> If97Result<Vec<IdealTerm>> {
    parse_rows(name, text, 3)?
        .into_iter()
        .map(|r| {
            Ok(IdealTerm {
                j: as_exponent(name, r[1])?,
                n: r[2],
            })
        })
        .collect()
}

/// Rows of (idx, N) into a 1-based array.
fn parse_indexed<const LEN: usize>(name: &'static str, text: &str) -> If97Result<[f64; LEN]> {
    let mut out = [0.0; LEN];
    for r in parse_rows(name, text, 2)? {
        let idx = r[0] as usize;
        if r[0].fract() != 0.0 || idx == 0 || idx >= LEN {
            return Err(If97Error::Table {
                name,
                what: format!("index {} out of range 1..{}", r[0], LEN - 1),
            });
        }
        out[idx] = r[1];
    }
    Ok(out)
}

impl Tables {
    fn parse_all() -> If97Result<Self> {
        Ok(Self {
            region1: parse_terms("region1", include_str!("../data/region1.csv"))?,
            region2_ideal: parse_ideal_terms(
                "region2-ideal",
                include_str!("../data/region2-ideal.csv"),
            )?,
            region2_residual: parse_terms(
                "region2-residual",
                include_str!("../data/region2-residual.csv"),
            )?,
            region3: parse_terms("region3", include_str!("../data/region3.csv"))?,
            region4: parse_indexed("region4", include_str!("../data/region4.csv"))?,
            region5_ideal: parse_ideal_terms(
                "region5-ideal",
                include_str!("../data/region5-ideal.csv"),
            )?,
            region5_residual: parse_terms(
                "region5-residual",
                include_str!("../data/region5-residual.csv"),
            )?,
            b23: parse_indexed("b23", include_str!("../data/b23.csv"))?,
            h3ab: parse_indexed("h3ab", include_str!("../data/h3ab.csv"))?,
            t3a_ph: parse_terms("t3a-ph", include_str!("../data/t3a-ph.csv"))?,
            t3b_ph: parse_terms("t3b-ph", include_str!("../data/t3b-ph.csv"))?,
            v3a_ph: parse_terms("v3a-ph", include_str!("../data/v3a-ph.csv"))?,
            v3b_ph: parse_terms("v3b-ph", include_str!("../data/v3b-ph.csv"))?,
            t3a_ps: parse_terms("t3a-ps", include_str!("../data/t3a-ps.csv"))?,
            t3b_ps: parse_terms("t3b-ps", include_str!("../data/t3b-ps.csv"))?,
            v3a_ps: parse_terms("v3a-ps", include_str!("../data/v3a-ps.csv"))?,
            v3b_ps: parse_terms("v3b-ps", include_str!("../data/v3b-ps.csv"))?,
            p3a_hs: parse_terms("p3a-hs", include_str!("../data/p3a-hs.csv"))?,
            p3b_hs: parse_terms("p3b-hs", include_str!("../data/p3b-hs.csv"))?,
        })
    }
}

/// The process-wide coefficient snapshot. A parse failure here means the
/// embedded resources are corrupted, which is a build defect, not a runtime
/// condition.
pub(crate) fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        Tables::parse_all().expect("embedded IF-97 coefficient tables are valid")
    })
}

/// Evaluate Σ N · x^I · y^J over a term table.
pub(crate) fn eval_series(terms: &[Term], x: f64, y: f64) -> f64 {
    terms
        .iter()
        .map(|t| t.n * x.powi(t.i) * y.powi(t.j))
        .sum()
}
