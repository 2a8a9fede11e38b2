use crate::models::domain::Difficulty;

pub const SYSTEM_PROMPT: &str = "You are an expert teacher and exam setter. \
You design rigorous, fair, and conceptually deep multiple-choice questions \
for students, based ONLY on the provided study material.";

pub fn difficulty_instruction(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "Focus mainly on fundamental concepts and clear understanding. \
             Questions should be accessible to beginners but still meaningful."
        }
        Difficulty::Medium => {
            "Include a mix of understanding and application questions. \
             Some questions can require connecting ideas or interpreting examples."
        }
        Difficulty::Hard => {
            "Focus on deeper conceptual understanding, application, and reasoning. \
             Questions can involve multi-step thinking, explaining 'why' something is true, \
             or evaluating different cases."
        }
        Difficulty::Mixed => {
            "Include a natural mix of easy, medium, and hard questions. \
             At least some questions should require application or reasoning, not just recall."
        }
    }
}

pub fn build_user_prompt(text: &str, num_questions: usize, difficulty: Difficulty) -> String {
    format!(
        r#"
You are given study material (transcript or text) from one or more video lessons.

Your task:
- Write {num_questions} HIGH-QUALITY multiple-choice questions that help students
  truly understand and think about the concepts in the text.

VERY IMPORTANT CONSTRAINTS:

1) CONTENT-BASED, NOT META
   - Questions MUST be about the actual subject matter (concepts, definitions, reasoning,
     examples, procedures) found in the text.
   - DO NOT ask meta questions like:
     - "What is taught in this video?"
     - "What will you learn in this playlist?"
     - "Which topics are covered in this lesson?"
     - "Who is the instructor?" or anything about the structure of the video.
   - Avoid questions that are only about the fact that it is a video or a playlist.

2) CONCEPTUAL AND EDUCATIONAL
   - Prefer questions that test understanding and application, not just word-spotting.
   - Good questions might ask:
     - Why something is true.
     - What would happen if X changes.
     - How to apply a rule or definition to an example.
     - To compare or distinguish between two related ideas.
   - Recall questions (basic definitions) are allowed, but do NOT make them trivial or vague.

3) GROUNDED IN THE TEXT
   - Every question and correct answer MUST be answerable strictly from the given text.
   - Do NOT invent facts that are not implied or stated in the text.
   - Do NOT use outside knowledge beyond what a careful reader could infer.

4) OPTIONS QUALITY
   - Each question must have EXACTLY 4 options.
   - Only ONE option is correct.
   - Wrong options should be plausible but clearly incorrect if you understand the concept.
   - Avoid options like "All of the above" or "None of the above".

5) EXPLANATIONS
   - For each question, provide a short explanation that:
     - Justifies why the correct option is correct.
     - Optionally mentions why a common wrong option is wrong.

6) DIFFICULTY CONTROL
   - Difficulty setting: {difficulty}
   - {instruction}

Study material (use ONLY this):

"""{text}"""

Return JSON ONLY in this exact structure (no backticks, no extra text):

{{
  "questions": [
    {{
      "question": "string",
      "options": ["option A", "option B", "option C", "option D"],
      "correct_index": 0,
      "explanation": "string"
    }}
  ]
}}
"#,
        num_questions = num_questions,
        difficulty = difficulty.as_str(),
        instruction = difficulty_instruction(difficulty),
        text = text,
    )
}
