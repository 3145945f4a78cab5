// src/analysis/score.rs
//! Score functions over per-node metrics.
//!
//! Risk and convertibility are separate weight tables over the same
//! inputs, not inverses of each other: a file can be low-risk to leave
//! alone and still hard to convert. Tune them independently.

use crate::graph::types::NodeMetrics;

/// Migration risk, 0..=100. Higher means touching this file is more
/// likely to break something.
#[must_use]
pub fn risk_score(m: &NodeMetrics) -> u32 {
    let mut score = 0u32;

    score += match m.fan_in {
        0..=2 => 0,
        3..=5 => 10,
        6..=10 => 20,
        _ => 30,
    };
    score += match m.fan_out {
        0..=5 => 0,
        6..=10 => 10,
        _ => 15,
    };

    if m.in_cycle {
        // Circular dependencies block independent migration.
        score += 40;
    }
    if m.writes_to_db {
        score += 20;
    }
    if m.reads_from_db {
        score += 5;
    }

    // Size terms, diminishing.
    score += match m.line_count {
        0..=199 => 0,
        200..=499 => 5,
        _ => 10,
    };
    if m.method_count >= 20 {
        score += 5;
    }

    if m.uses_threading {
        score += 10;
    }
    if m.uses_reflection {
        score += 10;
    }
    if m.has_inheritance {
        score += 5;
    }

    score.min(100)
}

/// Ease of automated conversion, 0..=100. Rewards simplicity; starts at
/// 100 and subtracts penalties, floored at 0.
#[must_use]
pub fn convertibility_score(m: &NodeMetrics) -> u32 {
    let mut penalty = 0u32;

    if m.in_cycle {
        penalty += 50;
    }
    if m.writes_to_db {
        penalty += 25;
    }
    penalty += match m.fan_in {
        0..=5 => 0,
        6..=10 => 10,
        _ => 20,
    };
    penalty += match m.fan_out {
        0..=5 => 0,
        6..=10 => 8,
        _ => 15,
    };
    if m.reads_from_db {
        penalty += 5;
    }
    if m.uses_reflection {
        penalty += 15;
    }
    if m.uses_threading {
        penalty += 10;
    }
    if m.has_inheritance {
        penalty += 8;
    }

    100u32.saturating_sub(penalty)
}

/// Structural complexity, 0..=100. Size and construct signals only;
/// coupling is deliberately excluded (that's risk's job).
#[must_use]
pub fn complexity_score(m: &NodeMetrics) -> u32 {
    let mut score = 0u32;

    score += match m.line_count {
        0..=199 => 0,
        200..=499 => 10,
        500..=999 => 20,
        _ => 30,
    };
    score += match m.method_count {
        0..=4 => 0,
        5..=14 => 5,
        15..=29 => 10,
        _ => 20,
    };
    score += match m.catch_block_count {
        0 => 0,
        1..=4 => 5,
        _ => 10,
    };
    score += match m.field_count {
        0..=7 => 0,
        8..=14 => 5,
        _ => 10,
    };

    if m.uses_generics {
        score += 5;
    }
    if m.uses_streams {
        score += 5;
    }
    if m.has_inner_classes {
        score += 10;
    }
    if m.uses_reflection {
        score += 15;
    }

    score.min(100)
}
