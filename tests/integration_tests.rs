use ytquiz_server::models::domain::Question;
use ytquiz_server::models::dto::request::{GenerateQuizRequest, SubmitQuizRequest};
use ytquiz_server::models::dto::response::{
    GenerateQuizResponse, PublicQuestion, QuestionResult, SubmitQuizResponse,
};

fn sample_question() -> Question {
    Question {
        id: 0,
        question: "Which form does the API accept?".to_string(),
        options: vec![
            "Playlist URL".to_string(),
            "Video URL".to_string(),
            "Bare video id".to_string(),
            "Any of these".to_string(),
        ],
        correct_index: 3,
        explanation: "All three input forms resolve.".to_string(),
    }
}

#[test]
fn generate_request_wire_shape_matches_api() {
    let body = r#"{
        "playlistUrl": "https://www.youtube.com/playlist?list=PL1",
        "questionsPerVideo": 3,
        "maxVideos": 5,
        "difficulty": "hard"
    }"#;

    let request: GenerateQuizRequest = serde_json::from_str(body).unwrap();

    assert_eq!(
        request.playlist_url,
        "https://www.youtube.com/playlist?list=PL1"
    );
    assert_eq!(request.questions_per_video, 3);
    assert_eq!(request.max_videos, 5);
    assert_eq!(request.difficulty.as_deref(), Some("hard"));
}

#[test]
fn submit_request_wire_shape_matches_api() {
    let body = r#"{
        "quizId": "b9f2",
        "answers": [
            {"questionId": 0, "selectedIndex": 1},
            {"questionId": 1, "selectedIndex": 3}
        ]
    }"#;

    let request: SubmitQuizRequest = serde_json::from_str(body).unwrap();

    assert_eq!(request.quiz_id, "b9f2");
    assert_eq!(request.answers.len(), 2);
    assert_eq!(request.answers[1].question_id, 1);
    assert_eq!(request.answers[1].selected_index, 3);
}

#[test]
fn generate_response_is_camel_case_and_answer_free() {
    let response = GenerateQuizResponse {
        quiz_id: "b9f2".to_string(),
        questions: vec![PublicQuestion::from(&sample_question())],
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["quizId"], "b9f2");
    assert_eq!(json["questions"][0]["id"], 0);
    assert_eq!(json["questions"][0]["options"].as_array().unwrap().len(), 4);
    assert!(json["questions"][0].get("correctIndex").is_none());
    assert!(json["questions"][0].get("explanation").is_none());
}

#[test]
fn submit_response_is_camel_case_with_full_result_rows() {
    let response = SubmitQuizResponse {
        score: 1,
        total: 3,
        percentage: 100.0 / 3.0,
        results: vec![QuestionResult {
            question_id: 0,
            correct_index: 3,
            selected_index: 3,
            is_correct: true,
            explanation: "All three input forms resolve.".to_string(),
        }],
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["score"], 1);
    assert_eq!(json["total"], 3);
    assert_eq!(json["results"][0]["questionId"], 0);
    assert_eq!(json["results"][0]["correctIndex"], 3);
    assert_eq!(json["results"][0]["selectedIndex"], 3);
    assert_eq!(json["results"][0]["isCorrect"], true);
}
