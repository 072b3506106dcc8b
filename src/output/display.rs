//! Display functions for command results

use super::formatters::{
    attempts_indicator, colored_reveal_row, create_progress_bar, difficulty_label,
    disabled_letters_text,
};
use crate::catalog::{Catalog, Meal};
use crate::commands::ReplayResult;
use crate::game::{GamePhase, MAX_ATTEMPTS, Outcome};
use colored::Colorize;

/// Print every cuisine with its region and meal count
pub fn print_cuisines(catalog: &Catalog) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CUISINES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for cuisine in catalog.cuisines() {
        println!(
            "  {:<28} {:<16} {}",
            cuisine.label.bright_white().bold(),
            cuisine.region.to_string().bright_black(),
            format!(
                "{} {}",
                cuisine.meals.len(),
                if cuisine.meals.len() == 1 { "meal" } else { "meals" }
            )
        );
    }
    println!();
}

/// Print a titled list of meals, starring favorites
pub fn print_meal_list(title: &str, meals: &[&Meal], is_favorite: impl Fn(&str) -> bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", title.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if meals.is_empty() {
        println!("\n  {}\n", "No meals found".bright_black());
        return;
    }

    for meal in meals {
        let star = if is_favorite(&meal.name) { "★" } else { " " };
        println!(
            "  {} {:<32} {:>8}  {}",
            star.bright_yellow(),
            meal.name.bright_white().bold(),
            meal.formatted_time(),
            difficulty_label(&meal.difficulty)
        );
        if !meal.description.is_empty() {
            println!("      {}", meal.description.bright_black());
        }
    }
    println!();
}

/// Print a meal's full recipe
pub fn print_meal_detail(meal: &Meal, is_favorite: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {}{}",
        meal.name.to_uppercase().bright_yellow().bold(),
        if is_favorite { " ★".bright_yellow().to_string() } else { String::new() }
    );
    println!("{}", "═".repeat(60).cyan());

    if !meal.description.is_empty() {
        println!("\n{}", meal.description);
    }

    println!("\n⏱  {}", "Time:".bright_cyan().bold());
    println!("   Prep:   {} mins", meal.prep_time);
    println!("   Cook:   {} mins", meal.cook_time);
    println!("   Total:  {}", meal.formatted_time());

    let details = [
        ("Difficulty", meal.difficulty.as_str()),
        ("Meal type", meal.meal_type.as_str()),
        ("Course", meal.course.as_str()),
        ("Cuisine", meal.cuisine.as_str()),
        ("Servings", meal.servings.as_str()),
        ("Calories", meal.calories.as_str()),
        ("Author", meal.author.as_str()),
    ];
    println!("\n📋 {}", "Details:".bright_cyan().bold());
    for (label, value) in details.iter().filter(|(_, value)| !value.is_empty()) {
        println!("   {:<11} {value}", format!("{label}:"));
    }
    if !meal.tags.is_empty() {
        println!("   {:<11} {}", "Tags:", meal.tags.join(", "));
    }

    println!("\n🧺 {}", "Ingredients:".bright_cyan().bold());
    if meal.ingredient_sections.is_empty() {
        for ingredient in &meal.ingredients {
            println!("   • {ingredient}");
        }
    } else {
        for section in &meal.ingredient_sections {
            println!("   {}", section.title.bold());
            for ingredient in &section.ingredients {
                println!("     • {ingredient}");
            }
        }
    }

    println!("\n🍳 {}", "Steps:".bright_cyan().bold());
    for (i, step) in meal.steps.iter().enumerate() {
        println!("   {}. {step}", (i + 1).to_string().bright_black());
    }

    let nutrition = meal.nutrition.rows();
    if !nutrition.is_empty() {
        println!("\n🥗 {}", "Nutrition:".bright_cyan().bold());
        for (label, value) in nutrition {
            println!("   {label:<20} {value}");
        }
    }

    if !meal.food_fact.is_empty() {
        println!("\n💡 {}", meal.food_fact.italic());
    }
    println!();
}

/// Print the result of a scripted replay
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replay: {} {}",
        "levels".bright_yellow().bold(),
        create_progress_bar(result.levels_won(), result.level_count, 20)
    );
    println!("{}", "─".repeat(60).cyan());

    let mut attempts = MAX_ATTEMPTS;
    let mut level = usize::MAX;
    for step in &result.steps {
        if step.level_index != level {
            level = step.level_index;
            attempts = MAX_ATTEMPTS;
            println!("\nDish {} of {}", level + 1, result.level_count);
        }
        if let Outcome::WrongGuess { attempts_remaining } = step.outcome {
            attempts = attempts_remaining;
        } else if matches!(step.outcome, Outcome::GameOver { .. }) {
            attempts = 0;
        }

        println!(
            "  {:<20} {}  {}  not in dish: {}",
            step.guess.to_uppercase(),
            colored_reveal_row(&step.reveals),
            attempts_indicator(attempts, MAX_ATTEMPTS),
            disabled_letters_text(step.disabled)
        );
        if let Some(message) = step.outcome.message() {
            println!("  {}", message.bright_black());
        }
    }

    println!();
    let summary = match result.final_phase {
        GamePhase::AllLevelsComplete => "✅ All dishes guessed!".green().bold(),
        GamePhase::GameLost => "❌ Game over".red().bold(),
        GamePhase::LevelWon | GamePhase::Playing => format!(
            "⏸  Stopped on dish {} of {}",
            result.level_index + 1,
            result.level_count
        )
        .yellow()
        .bold(),
    };
    println!("{summary}");
    if result.unplayed > 0 {
        println!("   {} guesses not played", result.unplayed);
    }
}
