//! Output formatting utilities

use crate::application::Insight;
use crate::domain::{Challenge, ImageRef, Moment, Prompt, ReflectionWizard, Strength, Value};
use crate::infrastructure::{MomentLinks, Notice};
use chrono::{DateTime, Utc};

/// British day-month-year
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}

/// Format a list of moments for display
pub fn format_moment_list(moments: &[Moment]) -> String {
    if moments.is_empty() {
        return "No moments found".to_string();
    }

    let mut output = String::new();
    for moment in moments {
        output.push_str(&format!(
            "{}  {}  {}  (mood {})",
            format_date(moment.timestamp),
            moment.id,
            moment.title,
            moment.mood
        ));
        if moment.is_default {
            output.push_str("  [default]");
        }
        output.push('\n');
    }
    output
}

pub fn format_moment_detail(moment: &Moment, links: &MomentLinks<'_>) -> String {
    let mut output = format!(
        "{}\n{}\n\nWhat happened?\n{}\n\nWhy was this meaningful?\n{}\n\nMood: {}\nImage: {}\n",
        moment.title,
        format_date(moment.timestamp),
        moment.description,
        moment.reflection,
        moment.mood,
        format_image(&moment.image)
    );

    if !links.values.is_empty() {
        let names: Vec<&str> = links.values.iter().map(|v| v.name.as_str()).collect();
        output.push_str(&format!("Values: {}\n", names.join(", ")));
    }
    if !links.strengths.is_empty() {
        let names: Vec<&str> = links.strengths.iter().map(|s| s.name.as_str()).collect();
        output.push_str(&format!("Strengths: {}\n", names.join(", ")));
    }
    if moment.is_default {
        output.push_str("(default entry, read-only)\n");
    }
    output
}

/// Uploaded images only live as long as the session
fn format_image(image: &ImageRef) -> String {
    if image.is_session_local() {
        format!("{} (this session only)", image)
    } else {
        image.to_string()
    }
}

pub fn format_value_list(values: &[&Value]) -> String {
    if values.is_empty() {
        return "No values found".to_string();
    }

    let mut output = String::new();
    for value in values {
        match &value.category {
            Some(category) => {
                output.push_str(&format!("{}  {}  [{}]\n", value.id, value.name, category))
            }
            None => output.push_str(&format!("{}  {}\n", value.id, value.name)),
        }
    }
    output
}

pub fn format_value_detail(value: &Value) -> String {
    let mut output = format!("{}\n{}\n", value.name, value.description);
    if let Some(category) = &value.category {
        output.push_str(&format!("Category: {}\n", category));
    }
    if let Some(icon) = value.icon {
        output.push_str(&format!("Icon: {}\n", icon));
    }
    if let Some(color) = value.color {
        output.push_str(&format!("Color: {} ({})\n", color, color.hex()));
    }
    output.push_str(&format!(
        "Image: {}\n\nReflection questions:\n",
        format_image(&value.image)
    ));
    for question in &value.questions {
        output.push_str(&format!("• {}\n", question));
    }
    output
}

pub fn format_strength_list(strengths: &[Strength]) -> String {
    if strengths.is_empty() {
        return "No strengths found".to_string();
    }

    let mut output = String::new();
    for strength in strengths {
        output.push_str(&format!(
            "{}  {}  reflections: {}  progress: {}%\n",
            strength.id,
            strength.name,
            strength.reflections.len(),
            strength.progress()
        ));
    }
    output
}

pub fn format_strength_detail(strength: &Strength) -> String {
    let mut output = format!(
        "{}\n{}\nColor: {} ({})\nReflections: {}  progress: {}%\n",
        strength.name,
        strength.description,
        strength.color,
        strength.color.hex(),
        strength.reflections.len(),
        strength.progress()
    );

    if !strength.reflections.is_empty() {
        output.push_str("\nUsage trend (1 underuse, 2 balanced, 3 overuse):\n");
        for (reflection, (date, score)) in strength.reflections.iter().zip(strength.usage_trend()) {
            output.push_str(&format!(
                "{}  {}  {}  {}\n",
                date.format("%d/%m/%Y"),
                score,
                reflection.usage,
                reflection.moment
            ));
        }
    }

    if let Some(activities) = strength.suggested_activities() {
        output.push_str("\nSuggested Activities:\n");
        for activity in activities {
            output.push_str(&format!("• {}\n", activity));
        }
    }
    output
}

/// Format challenges with their strength; open challenges past due are flagged
pub fn format_challenge_list(challenges: &[(&Challenge, &Strength)], now: DateTime<Utc>) -> String {
    if challenges.is_empty() {
        return "No challenges found".to_string();
    }

    let mut output = String::new();
    for (challenge, strength) in challenges {
        output.push_str(&format!(
            "[{}] {}  {}  ({}, due {})",
            if challenge.completed { "x" } else { " " },
            challenge.id,
            challenge.description,
            strength.name,
            format_date(challenge.due)
        ));
        if challenge.is_overdue(now) {
            output.push_str("  overdue");
        }
        output.push('\n');
    }
    output
}

pub fn format_prompt_list(prompts: &[&Prompt]) -> String {
    if prompts.is_empty() {
        return "No prompts found".to_string();
    }

    let mut output = String::new();
    for prompt in prompts {
        output.push_str(&format!(
            "{}  {}: {}\n",
            prompt.id, prompt.title, prompt.question
        ));
    }
    output
}

pub fn format_wizard(wizard: &ReflectionWizard) -> String {
    let step = wizard.step();
    let mut output = format!(
        "Reflecting on {} - step {}/3: {}\n{}\n",
        wizard.strength_name(),
        step.index() + 1,
        step.title(),
        wizard.question()
    );
    if !wizard.current_answer().is_empty() {
        output.push_str(&format!("Answer: {}\n", wizard.current_answer()));
    }
    output
}

pub fn format_insight(insight: &Insight) -> String {
    format!(
        "Reflection Insights\n{}\n\nYour Moment: {}\nYour Use: {}\nFuture Balance: {}\n",
        insight.message, insight.moment, insight.usage_answer, insight.balance_answer
    )
}

pub fn format_notice(notice: &Notice) -> String {
    format!("{}: {}\n", notice.title, notice.body)
}
