/// Instruction block appended to every quiz-generation prompt. The model is
/// asked for JSON only; the reply still gets best-effort extraction because
/// models routinely wrap it in prose or code fences.
pub const QUIZ_FORMAT_INSTRUCTIONS: &str = r#"Format your response as JSON only:
{
  "questions": [
    {
      "question": "Question text here?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": "Option A"
    }
  ]
}

Make sure the questions are appropriate for the grade level and subject. Each question should have exactly 4 options."#;
