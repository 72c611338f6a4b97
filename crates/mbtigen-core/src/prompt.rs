//! Prompt templates for both generation variants.
//!
//! Every builder here is a pure formatting function. The message and
//! character prompts are written in Korean to match the output language;
//! the image prompt is English because image models follow it best.

use mbtigen_types::error::PromptError;
use mbtigen_types::personality::PersonalityType;
use mbtigen_types::theme::Theme;

/// System instruction sent alongside the daily-message prompt.
pub const MESSAGE_SYSTEM_PROMPT: &str = "당신은 공감 능력이 뛰어난 MBTI 전문가입니다.";

/// System instruction sent alongside the character prompt.
pub const CHARACTER_SYSTEM_PROMPT: &str = "당신은 마법 세계 캐릭터 생성 전문가입니다.";

/// Formats the natural-language instructions sent to the generation endpoints.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Daily message for a type and theme.
    ///
    /// Asks for exactly three numbered lines: advice, a drama-style quote,
    /// and a suggested action.
    pub fn build_message_prompt(personality: PersonalityType, theme: Theme) -> String {
        format!(
            "당신은 {personality} 유형의 사람에게 오늘 하루를 위한 짧고 인사이트 있는 메시지를 주는 AI입니다.\n\
             \n\
             테마는 \"{theme}\"입니다.\n\
             \n\
             다음 형식으로 출력해주세요:\n\
             1. 오늘의 조언: (1줄)\n\
             2. 오늘의 대사: (1줄, 드라마/영화처럼)\n\
             3. 추천 행동: (1줄)\n\
             \n\
             짧고 공감되며, 감성적으로 써주세요.\n",
            theme = theme.label(),
        )
    }

    /// Wizard-world character for a type.
    ///
    /// Asks for exactly five numbered fields: name, role, lineage,
    /// personality and abilities, appearance.
    pub fn build_character_prompt(personality: PersonalityType) -> String {
        format!(
            "당신은 창의적인 마법사 캐릭터 디자이너입니다.\n\
             사용자의 MBTI 성격 유형이 \"{personality}\"일 때, 해리포터나 신비한 동물사전 같은 세계관에 등장할 법한 마법 캐릭터를 상상하여 만들어주세요.\n\
             \n\
             출력 형식 (한국어로 작성):\n\
             \n\
             1. 캐릭터 이름: (마법사다운 독창적인 이름)\n\
             2. 역할/직업: (예: 어둠 방어술 교수, 마법 생물 조련사, 마법 약초학자 등)\n\
             3. 종족/혈통: (예: 인간, 하프엘프, 늑대인간, 정령 등)\n\
             4. 성격 및 능력: (2~3문장. 성격과 마법 능력, 특이점 포함)\n\
             5. 외형 묘사: (머리카락, 의상, 소품, 동물 친구 등 마법적 요소 포함)\n\
             \n\
             문체는 마법 세계 백과사전이나 호그와트 연감처럼, 상상력 풍부하고 몰입감 있게 써주세요.\n"
        )
    }

    /// Image prompt embedding a previously generated description verbatim.
    ///
    /// Refuses a blank description; the caller only reaches this after a
    /// successful description call.
    pub fn build_image_prompt(
        personality: PersonalityType,
        description: &str,
    ) -> Result<String, PromptError> {
        if description.trim().is_empty() {
            return Err(PromptError::EmptyDescription);
        }

        Ok(format!(
            "A full-body portrait of a magical character inspired by Harry Potter and Fantastic Beasts, based on MBTI type {personality}.\n\
             The character is described as: {description}.\n\
             Outfit includes wizard robes, cloak, wand, magical accessories.\n\
             Background setting: wizard school, magical forest, potion room, or ancient library.\n\
             Style: detailed concept art, cinematic lighting, fantasy atmosphere.\n"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lines that start with "<digit>. ".
    fn numbered_lines(prompt: &str) -> Vec<&str> {
        prompt
            .lines()
            .filter(|line| {
                let mut chars = line.chars();
                matches!(chars.next(), Some(c) if c.is_ascii_digit())
                    && chars.next() == Some('.')
                    && chars.next() == Some(' ')
            })
            .collect()
    }

    #[test]
    fn message_prompt_embeds_type_and_theme() {
        let prompt = PromptBuilder::build_message_prompt(PersonalityType::Infp, Theme::Philosophy);
        assert!(prompt.contains("INFP"));
        assert!(prompt.contains("철학"));
    }

    #[test]
    fn message_prompt_requests_three_numbered_lines() {
        let prompt = PromptBuilder::build_message_prompt(PersonalityType::Infp, Theme::Philosophy);
        let lines = numbered_lines(&prompt);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1. 오늘의 조언"));
        assert!(lines[1].starts_with("2. 오늘의 대사"));
        assert!(lines[2].starts_with("3. 추천 행동"));
    }

    #[test]
    fn message_prompt_is_deterministic() {
        let a = PromptBuilder::build_message_prompt(PersonalityType::Entp, Theme::Humor);
        let b = PromptBuilder::build_message_prompt(PersonalityType::Entp, Theme::Humor);
        assert_eq!(a, b);
    }

    #[test]
    fn message_prompt_quotes_theme() {
        let prompt = PromptBuilder::build_message_prompt(PersonalityType::Isfj, Theme::Romance);
        assert!(prompt.contains("테마는 \"연애\"입니다."));
    }

    #[test]
    fn character_prompt_embeds_type_and_five_fields() {
        let prompt = PromptBuilder::build_character_prompt(PersonalityType::Estj);
        assert!(prompt.contains("\"ESTJ\""));

        let lines = numbered_lines(&prompt);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1. 캐릭터 이름"));
        assert!(lines[4].starts_with("5. 외형 묘사"));
    }

    #[test]
    fn image_prompt_embeds_type_and_description_verbatim() {
        let description = "1. 캐릭터 이름: 세라핀 물안개\n2. 역할/직업: 마법 약초학자";
        let prompt = PromptBuilder::build_image_prompt(PersonalityType::Isfp, description).unwrap();
        assert!(prompt.contains("ISFP"));
        assert!(prompt.contains(description));
        assert!(prompt.contains("Style: detailed concept art"));
    }

    #[test]
    fn image_prompt_refuses_blank_description() {
        assert_eq!(
            PromptBuilder::build_image_prompt(PersonalityType::Isfp, ""),
            Err(PromptError::EmptyDescription)
        );
        assert_eq!(
            PromptBuilder::build_image_prompt(PersonalityType::Isfp, "  \n "),
            Err(PromptError::EmptyDescription)
        );
    }

    #[test]
    fn system_prompts_are_distinct() {
        assert_ne!(MESSAGE_SYSTEM_PROMPT, CHARACTER_SYSTEM_PROMPT);
        assert!(MESSAGE_SYSTEM_PROMPT.contains("MBTI"));
    }
}
