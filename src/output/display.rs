//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SimulationResult;
use crate::wordlists::DictionaryInfo;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Dictionary:       {}", result.dictionary);
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses()).bright_yellow()
    );
    println!("   Losses:           {}", result.losses().to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    if result.wins > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = count as f64 / result.games as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Missed words:".red().bold());
        for chunk in result.failed_words.chunks(8) {
            println!("   {}", chunk.join(" "));
        }
    }
    println!();
}

/// Print the dictionary catalogue
pub fn print_dictionaries(dictionaries: &[DictionaryInfo], default_id: &str) {
    println!("\n{}", "Dictionaries".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    for info in dictionaries {
        let marker = if info.id == default_id { "*" } else { " " };
        println!(
            "{marker} {:<12} {:<10} {} letters, {:>5} words  {}",
            info.id.bright_yellow(),
            info.name,
            info.word_length,
            info.word_count,
            info.description.bright_black()
        );
    }
    println!();
}
