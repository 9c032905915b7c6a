use trivia_core::QuestionBank;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bank = QuestionBank::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&bank.iter().collect::<Vec<_>>())?);
        return Ok(());
    }

    print_questions(&bank);
    Ok(())
}

/// Numbered questions with 1-based option numbers, as `play` expects them.
pub(crate) fn print_questions(bank: &QuestionBank) {
    for (i, question) in bank.iter().enumerate() {
        println!("{}. {}", i + 1, question.text);
        for (j, option) in question.options.iter().enumerate() {
            println!("   {}) {}", j + 1, option);
        }
    }
}
