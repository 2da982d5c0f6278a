//! The `mathmaster init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathmaster.toml").exists() {
        println!("mathmaster.toml already exists, skipping.");
    } else {
        std::fs::write("mathmaster.toml", SAMPLE_CONFIG)?;
        println!("Created mathmaster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust mathmaster.toml if you want different tunings");
    println!("  2. Run: mathmaster play");
    println!("  3. Run: mathmaster timed");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathmaster configuration
#
# Every field is optional; missing fields keep the values shown here.

[scoring]
base_points = 100.0
difficulty_multipliers = [1.0, 1.5, 2.5]
speed_bonus_threshold_secs = 5.0
speed_bonus_max = 50.0
streak_bonus_threshold = 3
streak_bonus_base = 25.0
streak_bonus_growth = 0.1

[adaptive]
window = 3
fast_avg_secs = 5.0
decrease_at_most_correct = 1

[game]
default_rounds = 10
default_time_limit_secs = 60

[scores]
path = "mathmaster_scores.json"
"#;
