use clap::Subcommand;
use trivia_core::{Category, Config, Difficulty, QuestionType};

#[derive(Subcommand)]
pub enum OptionsAction {
    /// Show the current selections and the choices for each
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update one or more selections
    Set {
        /// Number of questions (1-20)
        #[arg(long)]
        questions: Option<u32>,
        /// Category, e.g. "science"
        #[arg(long)]
        category: Option<String>,
        /// Difficulty, e.g. "hard"
        #[arg(long)]
        difficulty: Option<String>,
        /// Question type, e.g. "true_false"
        #[arg(long = "type")]
        question_type: Option<String>,
    },
}

pub fn run(action: OptionsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OptionsAction::Show { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config.options)?);
                return Ok(());
            }
            let options = &config.options;
            println!("Number of Questions: {}", options.number_of_questions);
            println!("Category:   {} (of {})", options.category, join(&Category::ALL));
            println!("Difficulty: {} (of {})", options.difficulty, join(&Difficulty::ALL));
            println!("Type:       {} (of {})", options.question_type, join(&QuestionType::ALL));
        }
        OptionsAction::Set {
            questions,
            category,
            difficulty,
            question_type,
        } => {
            let mut config = Config::load()?;
            if let Some(n) = questions {
                config.apply("options.number_of_questions", &n.to_string())?;
            }
            if let Some(category) = category {
                config.apply("options.category", &category)?;
            }
            if let Some(difficulty) = difficulty {
                config.apply("options.difficulty", &difficulty)?;
            }
            if let Some(question_type) = question_type {
                config.apply("options.question_type", &question_type)?;
            }
            config.save()?;
            println!("ok");
        }
    }
    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
