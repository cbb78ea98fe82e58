//! Question flow: detect language, translate to English, resolve, translate back.

use tracing::info;

use crate::resolver::AnswerResolver;
use crate::translate::{Lang, LangChoice, Translator, TranslationGateway};

pub const EMPTY_QUESTION: &str = "Please enter a question.";

#[derive(Debug)]
pub struct Reply {
    /// Answer in the user's language (or English when translation fell back).
    pub text: String,
    pub lang: Lang,
    pub english_answer: String,
    pub question_translated: bool,
    pub answer_translated: bool,
}

pub async fn answer<T: Translator>(
    resolver: &AnswerResolver,
    gateway: &TranslationGateway<T>,
    question: &str,
    choice: LangChoice,
) -> Reply {
    let question = question.trim();
    if question.is_empty() {
        return Reply {
            text: EMPTY_QUESTION.to_string(),
            lang: Lang::En,
            english_answer: EMPTY_QUESTION.to_string(),
            question_translated: false,
            answer_translated: false,
        };
    }

    let lang = match choice {
        LangChoice::Auto => gateway.detect_language(question),
        fixed => fixed.resolve(question),
    };

    let english_question = gateway.translate(question, lang, Lang::En).await;
    let english_answer = resolver.resolve(english_question.text());
    let reply = gateway.translate(&english_answer, Lang::En, lang).await;

    info!(
        %lang,
        question_translated = english_question.is_translated(),
        answer_translated = reply.is_translated(),
        "question answered"
    );

    Reply {
        question_translated: english_question.is_translated(),
        answer_translated: reply.is_translated(),
        text: reply.into_text(),
        lang,
        english_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::resolver::NO_ANSWER;
    use crate::translate::TranslateError;
    use crate::translate::testing::MockTranslator;

    fn resolver() -> AnswerResolver {
        AnswerResolver::new(
            KnowledgeBase::from_json(
                r#"{"professions": {"Doctor": {"exams": ["NEET", "AIIMS"]}}}"#,
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn english_question_makes_no_translation_calls() {
        let mock = MockTranslator::with_responses(vec![]);
        let gateway = TranslationGateway::new(&mock);

        let reply = answer(&resolver(), &gateway, "exams for doctor", LangChoice::Auto).await;

        assert_eq!(reply.text, "NEET, AIIMS");
        assert_eq!(reply.lang, Lang::En);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn hindi_round_trip_returns_translated_answer() {
        let mock = MockTranslator::with_responses(vec![
            Ok("What are the exams for doctor?".into()),
            Ok("नीट, एम्स".into()),
        ]);
        let gateway = TranslationGateway::new(&mock);

        let reply = answer(
            &resolver(),
            &gateway,
            "डॉक्टर बनने के लिए क्या परीक्षा है?",
            LangChoice::Auto,
        )
        .await;

        assert_eq!(reply.lang, Lang::Hi);
        assert_eq!(reply.english_answer, "NEET, AIIMS");
        assert_eq!(reply.text, "नीट, एम्स");
        assert!(reply.question_translated && reply.answer_translated);

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!((calls[0].1, calls[0].2), (Lang::Hi, Lang::En));
        assert_eq!(calls[1], ("NEET, AIIMS".to_string(), Lang::En, Lang::Hi));
    }

    #[tokio::test]
    async fn failed_answer_translation_returns_english() {
        let mock = MockTranslator::with_responses(vec![
            Ok("doctor exams".into()),
            Err(TranslateError::RateLimited),
        ]);
        let gateway = TranslationGateway::new(&mock);

        let reply = answer(&resolver(), &gateway, "डॉक्टर परीक्षा", LangChoice::Mr).await;

        assert_eq!(reply.lang, Lang::Mr);
        assert_eq!(reply.text, "NEET, AIIMS");
        assert!(!reply.answer_translated);
    }

    #[tokio::test]
    async fn failed_question_translation_still_resolves_original() {
        let mock = MockTranslator::with_responses(vec![
            Err(TranslateError::RateLimited),
            Err(TranslateError::RateLimited),
        ]);
        let gateway = TranslationGateway::new(&mock);

        let reply = answer(&resolver(), &gateway, "विज्ञान", LangChoice::Auto).await;

        assert_eq!(reply.text, NO_ANSWER);
        assert!(!reply.question_translated);
    }

    #[tokio::test]
    async fn blank_question_is_rejected() {
        let gateway = TranslationGateway::<MockTranslator>::disabled();
        let reply = answer(&resolver(), &gateway, "   ", LangChoice::Auto).await;
        assert_eq!(reply.text, EMPTY_QUESTION);
    }
}
