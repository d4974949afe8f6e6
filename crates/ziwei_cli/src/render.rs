//! Plain-text rendering of chart and analysis results.

use std::fmt::Write;

use ziwei_analysis::{
    ChartReport, ChartSummary, PalaceAnalysis, PatternClass, PatternResult, StarReading,
    YearlyFortune, total_score,
};
use ziwei_base::{Chart, Palace, Star};

fn star_line(star: &Star) -> String {
    let mut line = format!("{} ({})", star.name, star.strength);
    if let Some(d) = star.dignity {
        let _ = write!(line, " {}", d.name());
    }
    for tag in &star.aspects {
        let _ = write!(line, " {}", tag.name());
    }
    line
}

fn palace_block(out: &mut String, palace: &Palace, marks: &str) {
    let _ = writeln!(
        out,
        "{:>2} {}{}",
        palace.position,
        palace.name.name(),
        marks
    );
    if palace.stars.is_empty() {
        let _ = writeln!(out, "     (空宫)");
    }
    for star in &palace.stars {
        let _ = writeln!(out, "     {}", star_line(star));
    }
}

pub fn chart(chart: &Chart) -> String {
    let b = &chart.birth_data;
    let mut out = String::new();
    let _ = writeln!(out, "Chart {}", chart.id);
    let _ = writeln!(
        out,
        "Birth: {}-{:02}-{:02} {:02}:{:02} {} ({:.4}E, {:.4}N)",
        b.year, b.month, b.day, b.hour, b.minute, b.gender, b.longitude, b.latitude
    );
    for palace in &chart.palaces {
        let mark = if chart.body_palace == palace.position { " [身]" } else { "" };
        palace_block(&mut out, palace, mark);
    }
    out
}

pub fn summary(s: &ChartSummary) -> String {
    let names = |stars: &[ziwei_base::StarName]| {
        stars.iter().map(|n| n.name()).collect::<Vec<_>>().join(" ")
    };
    let mut out = String::new();
    if let Some(p) = &s.life_palace {
        let _ = writeln!(out, "命宫 {}: {}", p.position, names(&p.stars));
    }
    if let Some(p) = &s.body_palace {
        let _ = writeln!(out, "身宫 {} {}: {}", p.position, p.name.name(), names(&p.stars));
    }
    match s.main_star_palace {
        Some(name) => {
            let _ = writeln!(out, "主星 {} 在 {}", s.main_star, name.name());
        }
        None => {
            let _ = writeln!(out, "主星 {} 未入宫", s.main_star);
        }
    }
    out
}

pub fn patterns(results: &[PatternResult]) -> String {
    if results.is_empty() {
        return "No formations\n".to_string();
    }
    let mut out = String::new();
    for r in results {
        let class = match r.classification {
            PatternClass::Good => "吉",
            PatternClass::Bad => "凶",
        };
        let _ = writeln!(out, "{} [{class}] {:+}  {}", r.name, r.score, r.description);
    }
    let _ = writeln!(out, "Total: {:+}", total_score(results));
    out
}

pub fn readings(readings: &[StarReading]) -> String {
    let mut out = String::new();
    for r in readings {
        let _ = writeln!(out, "{}: {}", r.star, r.text);
    }
    out
}

pub fn palaces(analyses: &[PalaceAnalysis]) -> String {
    let mut out = String::new();
    for a in analyses {
        let _ = writeln!(
            out,
            "{} {:+} (吉{} 凶{} 共{})  {}",
            a.name.name(),
            a.score,
            a.good_star_count,
            a.bad_star_count,
            a.star_count,
            a.interpretation
        );
    }
    out
}

pub fn fortune(f: &YearlyFortune) -> String {
    let description = if f.description.is_empty() {
        "平"
    } else {
        f.description.as_str()
    };
    format!(
        "{}: {:+} (大限 {}, 流年 {})\n{}\n",
        f.year,
        f.score,
        f.major_cycle_index + 1,
        f.annual_index + 1,
        description
    )
}

pub fn report(r: &ChartReport) -> String {
    let mut out = chart(&r.chart);
    let sections = [
        ("Summary", summary(&r.summary)),
        ("Formations", patterns(&r.patterns)),
        ("Readings", readings(&r.star_readings)),
        ("Palaces", palaces(&r.palaces)),
        ("Fortune", fortune(&r.yearly_fortune)),
    ];
    for (title, body) in sections {
        let _ = write!(out, "\n== {title} ==\n{body}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_analysis::{chart_report, detect_patterns};
    use ziwei_base::{BirthData, Gender, compute_chart};

    fn sample() -> Chart {
        compute_chart(&BirthData::new(1991, 7, 12, 12, Gender::Male))
    }

    #[test]
    fn chart_marks_body_palace() {
        let text = chart(&sample());
        assert!(text.contains(" 1 命宫\n     太阴 (90)"));
        assert!(text.contains(" 6 疾厄 [身]"));
        assert!(!text.contains(" 1 命宫 [身]"));
    }

    #[test]
    fn pattern_lines_and_total() {
        let text = patterns(&detect_patterns(&sample()));
        assert!(text.contains("紫府同宫 [吉] +85"));
        assert!(text.ends_with("Total: +85\n"));
        assert_eq!(patterns(&[]), "No formations\n");
    }

    #[test]
    fn report_has_every_section() {
        let report = chart_report(&sample(), 2003).unwrap();
        let text = super::report(&report);
        for title in ["Summary", "Formations", "Readings", "Palaces", "Fortune"] {
            assert!(text.contains(&format!("== {title} ==")), "{title}");
        }
        assert!(text.contains("流年遇天府吉星"));
    }
}
