// Colored terminal output for detection reports.
//
// The CLI `check` command delegates here; --json bypasses this entirely.

use colored::Colorize;

use crate::detect::report::DetectionReport;

use super::truncate_chars;

/// Display a full detection report in the terminal.
pub fn display_report(report: &DetectionReport) {
    println!("\n{}", "=== Similarity Report ===".bold());
    println!();

    println!(
        "  Overall similarity: {}",
        colorize_percentage(report.summary.overall_similarity)
    );
    println!(
        "  Level 1 ({}): {}%",
        report.level1_basic.method, report.level1_basic.similarity_percentage
    );
    println!(
        "  Level 2: {}/{} sentences matched",
        report.level2_sentence.plagiarized_count, report.level2_sentence.total_sentences
    );
    println!(
        "  Level 3: {} paraphrase candidates",
        report.level3_semantic.semantic_plagiarized_count
    );

    if !report.level2_sentence.plagiarized_sentences.is_empty() {
        println!("\n{}", "Matched sentences".bold());
        for matched in &report.level2_sentence.plagiarized_sentences {
            println!(
                "  {:>3}% [{}] \"{}\"",
                matched.similarity,
                matched.position,
                truncate_chars(&matched.sentence, 80),
            );
            println!(
                "        matches \"{}\"",
                truncate_chars(&matched.matching_sentence, 80).dimmed()
            );
        }
    }

    if !report
        .level3_semantic
        .semantic_plagiarized_sentences
        .is_empty()
    {
        println!("\n{}", "Possible paraphrases".bold());
        for para in &report.level3_semantic.semantic_plagiarized_sentences {
            println!(
                "  {:>3}% [{}] \"{}\"",
                para.semantic_similarity,
                para.position,
                truncate_chars(&para.sentence, 80),
            );
            println!(
                "        resembles \"{}\"",
                truncate_chars(&para.matching_sentence, 80).dimmed()
            );
        }

        let shown = report.level3_semantic.semantic_plagiarized_sentences.len();
        let total = report.level3_semantic.semantic_plagiarized_count;
        if total > shown {
            println!("  {}", format!("... and {} more", total - shown).dimmed());
        }
    }
    println!();
}

/// Color the overall percentage by severity band.
fn colorize_percentage(pct: u32) -> String {
    let text = format!("{pct}%");
    if pct > 70 {
        text.red().bold().to_string()
    } else if pct > 40 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}
