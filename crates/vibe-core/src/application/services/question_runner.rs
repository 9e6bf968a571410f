//! Question Runner - issues the questionnaire over a [`Prompter`].
//!
//! Every prompt blocks for exactly one line. Malformed input never fails:
//! bad menu selections fall back to the first option and unparseable
//! multi-select entries are dropped.

use std::fmt::Display;

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompter,
    domain::{
        AnswerSet, Complexity, Device, Domain, FeatureAnswer, MAX_FEATURES, Priority,
        ProjectType, SetupProfile, TechnicalLevel, UsageFrequency, quick_defaults,
    },
    error::VibeResult,
};

/// Drives one questionnaire session.
pub struct QuestionRunner<P> {
    prompter: P,
}

impl<P: Prompter> QuestionRunner<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Give back the underlying prompter.
    pub fn into_inner(self) -> P {
        self.prompter
    }

    /// Ask the question set of `profile` and return the completed answers.
    #[instrument(skip(self))]
    pub fn collect(&mut self, profile: SetupProfile) -> VibeResult<AnswerSet> {
        self.prompter.say(profile.banner())?;
        self.prompter.say(profile.tagline())?;
        self.prompter.say("")?;

        let answers = match profile {
            SetupProfile::Full => self.ask_full()?,
            SetupProfile::Quick => self.ask_quick()?,
        };
        debug!(
            name = %answers.name,
            features = answers.core_features.len(),
            "Questionnaire completed"
        );
        Ok(answers)
    }

    // ── Primitive questions ──────────────────────────────────────────────

    /// Single line of free text, whitespace-trimmed. Empty is a valid answer.
    pub fn ask(&mut self, question: &str) -> VibeResult<String> {
        Ok(self.prompter.prompt(question)?.trim().to_string())
    }

    /// Numbered menu; out-of-range or non-numeric input selects the first
    /// option after printing a notice.
    ///
    /// # Panics
    /// Panics if `options` is empty.
    pub fn ask_choice<T: Clone + Display>(
        &mut self,
        question: &str,
        options: &[T],
    ) -> VibeResult<T> {
        self.prompter.say(question)?;
        self.print_menu(options)?;

        let answer = self.ask(&format!("Choose (1-{}): ", options.len()))?;
        match parse_selection(&answer, options.len()) {
            Some(index) => Ok(options[index].clone()),
            None => {
                debug!(input = %answer, "Invalid choice, falling back to first option");
                self.prompter.say("Invalid choice, using first option.")?;
                Ok(options[0].clone())
            }
        }
    }

    /// Comma-separated 1-based indices. Out-of-range and non-numeric entries
    /// are dropped; repeats are kept in input order.
    pub fn ask_multiple<T: Clone + Display>(
        &mut self,
        question: &str,
        options: &[T],
    ) -> VibeResult<Vec<T>> {
        self.prompter.say(&format!(
            "{question} (select multiple by number, separated by commas)"
        ))?;
        self.print_menu(options)?;

        let answer = self.ask("Choose (e.g., 1,2): ")?;
        Ok(answer
            .split(',')
            .filter_map(|part| parse_selection(part, options.len()))
            .map(|index| options[index].clone())
            .collect())
    }

    /// `true` iff the answer starts with `y` (case-insensitive).
    pub fn ask_yes_no(&mut self, question: &str) -> VibeResult<bool> {
        let answer = self.ask(&format!("{question} (y/n): "))?;
        Ok(answer.to_lowercase().starts_with('y'))
    }

    /// Repeated feature sub-form. Stops on an empty name or after
    /// [`MAX_FEATURES`] entries; never returns an empty list.
    pub fn ask_features(&mut self) -> VibeResult<Vec<FeatureAnswer>> {
        let mut features = Vec::new();
        self.prompter
            .say("Enter your core features (press Enter with empty input to finish):")?;

        loop {
            let name = self.ask(&format!(
                "Feature {} name (or Enter to finish): ",
                features.len() + 1
            ))?;
            if name.is_empty() {
                break;
            }

            let priority = self.ask_choice("Priority:", Priority::ALL)?;
            let complexity = self.ask_choice("Complexity:", Complexity::ALL)?;
            features.push(FeatureAnswer::new(name, priority, complexity));

            if features.len() >= MAX_FEATURES {
                self.prompter.say("Maximum 5 core features recommended.")?;
                break;
            }
        }

        if features.is_empty() {
            features.push(FeatureAnswer::placeholder());
        }
        Ok(features)
    }

    // ── Question sets ────────────────────────────────────────────────────

    fn ask_full(&mut self) -> VibeResult<AnswerSet> {
        let mut answers = AnswerSet::empty();

        answers.name = self.ask("🎯 Project name: ")?;
        answers.project_type = self.ask_choice("📱 Project type:", ProjectType::ALL)?;
        answers.domain = self.ask_choice("🏷️  Domain/theme:", Domain::MENU)?;
        answers.description = self.ask("📝 One sentence description: ")?;

        self.section("👥 Target Audience:")?;
        answers.primary_users = self.ask("Who will use this? (demographics, roles): ")?;
        answers.technical_level = self.ask_choice("Their technical level:", TechnicalLevel::ALL)?;
        answers.usage_frequency =
            self.ask_choice("How often will they use it:", UsageFrequency::ALL)?;
        answers.devices = self.ask_multiple("Primary devices:", Device::ALL)?;

        self.section("🚀 Core Features:")?;
        answers.core_features = self.ask_features()?;

        self.section("⚙️  Technical Requirements:")?;
        answers.needs_auth = self.ask_yes_no("Need user accounts/login?")?;
        answers.needs_realtime =
            self.ask_yes_no("Need real-time features? (live updates, chat, etc.)")?;
        answers.needs_offline = self.ask_yes_no("Need to work offline?")?;
        answers.integrations = self.ask(
            "Any specific integrations? (APIs, services - or press Enter to skip): ",
        )?;

        self.section("💡 Business Context:")?;
        answers.business_logic = self.ask("Key business rules or constraints: ")?;
        answers.user_workflows =
            self.ask("Typical user workflow (what do users do step by step): ")?;
        answers.priorities =
            self.ask("What matters most? (performance, features, simplicity, etc.): ")?;

        Ok(answers)
    }

    fn ask_quick(&mut self) -> VibeResult<AnswerSet> {
        let name = self.ask("1. Project name: ")?;

        self.section("2. Project type:")?;
        let labels: Vec<&str> = quick_defaults::TYPE_MENU.iter().map(|(l, _)| *l).collect();
        self.print_menu(&labels)?;
        let choice = self.ask(&format!("Choose (1-{}): ", labels.len()))?;
        let project_type = parse_selection(&choice, labels.len())
            .map_or(quick_defaults::PROJECT_TYPE, |i| quick_defaults::TYPE_MENU[i].1);

        self.prompter.say("")?;
        let description = self.ask("3. What does it do? (one sentence): ")?;
        self.prompter.say("")?;
        let users = self.ask("4. Who will use it? (target audience): ")?;
        self.prompter.say("")?;
        let priority = self.ask("5. What matters most? (performance/features/simplicity): ")?;

        Ok(quick_defaults::answers(
            &name,
            project_type,
            &description,
            &users,
            &priority,
        ))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn section(&mut self, heading: &str) -> VibeResult<()> {
        self.prompter.say("")?;
        self.prompter.say(heading)
    }

    fn print_menu<T: Display>(&mut self, options: &[T]) -> VibeResult<()> {
        for (index, option) in options.iter().enumerate() {
            self.prompter.say(&format!("  {}. {}", index + 1, option))?;
        }
        Ok(())
    }
}

/// Parse a 1-based menu selection into a 0-based index within `len`.
///
/// Only the leading integer counts, so `"2."`, `"2)"` and `"2abc"` all
/// select the second option. Negative numbers are never in range.
fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let number: usize = unsigned[..digits_end].parse().ok()?;
    if negative {
        return None;
    }
    (1..=len).contains(&number).then(|| number - 1)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Feeds canned lines and records everything written.
    #[derive(Default)]
    struct Script {
        input: VecDeque<String>,
        output: Vec<String>,
    }

    impl Script {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|l| l.to_string()).collect(),
                output: Vec::new(),
            }
        }
    }

    impl Prompter for Script {
        fn say(&mut self, line: &str) -> VibeResult<()> {
            self.output.push(line.to_string());
            Ok(())
        }

        fn prompt(&mut self, question: &str) -> VibeResult<String> {
            self.output.push(question.to_string());
            Ok(self.input.pop_front().unwrap_or_default())
        }
    }

    fn runner(lines: &[&str]) -> QuestionRunner<Script> {
        QuestionRunner::new(Script::new(lines))
    }

    const ABC: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn ask_trims() {
        let mut r = runner(&["  hello world \t"]);
        assert_eq!(r.ask("q").unwrap(), "hello world");
    }

    #[test]
    fn ask_choice_in_range() {
        let mut r = runner(&["2"]);
        assert_eq!(r.ask_choice("pick", &ABC).unwrap(), "b");
    }

    #[test]
    fn ask_choice_falls_back_to_first() {
        for input in ["0", "99", "abc", "", "-1"] {
            let mut r = runner(&[input]);
            assert_eq!(r.ask_choice("pick", &ABC).unwrap(), "a", "input {input:?}");
            let script = r.into_inner();
            assert!(
                script
                    .output
                    .contains(&"Invalid choice, using first option.".to_string())
            );
        }
    }

    #[test]
    fn ask_choice_reads_leading_digits() {
        for input in ["2.", "2)", "2abc", "2.0", " +2 ", "02"] {
            let mut r = runner(&[input]);
            assert_eq!(r.ask_choice("pick", &ABC).unwrap(), "b", "input {input:?}");
            assert!(
                !r.into_inner()
                    .output
                    .contains(&"Invalid choice, using first option.".to_string())
            );
        }
    }

    #[test]
    fn ask_choice_rejects_missing_leading_digits() {
        for input in ["x2", "-2", "+", ".2"] {
            let mut r = runner(&[input]);
            assert_eq!(r.ask_choice("pick", &ABC).unwrap(), "a", "input {input:?}");
        }
    }

    #[test]
    fn ask_choice_prints_numbered_menu() {
        let mut r = runner(&["1"]);
        r.ask_choice("pick", &ABC).unwrap();
        let out = r.into_inner().output;
        assert_eq!(out[0], "pick");
        assert_eq!(out[1], "  1. a");
        assert_eq!(out[3], "  3. c");
        assert_eq!(out[4], "Choose (1-3): ");
    }

    #[test]
    fn ask_multiple_filters_out_of_range() {
        let mut r = runner(&["1,3,99"]);
        assert_eq!(r.ask_multiple("pick", &ABC).unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn ask_multiple_reads_leading_digits_of_each_entry() {
        let mut r = runner(&["1,2x,3."]);
        assert_eq!(r.ask_multiple("pick", &ABC).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn ask_multiple_empty_input() {
        let mut r = runner(&[""]);
        assert!(r.ask_multiple("pick", &ABC).unwrap().is_empty());
    }

    #[test]
    fn ask_multiple_keeps_repeats_and_spaces() {
        let mut r = runner(&[" 1 , 1,2 ,x"]);
        assert_eq!(r.ask_multiple("pick", &ABC).unwrap(), vec!["a", "a", "b"]);
    }

    #[test]
    fn ask_yes_no() {
        for (input, expected) in [
            ("y", true),
            ("Yes", true),
            ("  YEP", true),
            ("n", false),
            ("", false),
            ("sure", false),
        ] {
            let mut r = runner(&[input]);
            assert_eq!(r.ask_yes_no("ok?").unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn features_stop_on_empty_name() {
        let mut r = runner(&["Login", "2", "1", "Search", "9", "3", ""]);
        let features = r.ask_features().unwrap();
        assert_eq!(
            features,
            vec![
                FeatureAnswer::new("Login", Priority::High, Complexity::Simple),
                FeatureAnswer::new("Search", Priority::Critical, Complexity::Complex),
            ]
        );
    }

    #[test]
    fn features_capped_at_five() {
        let mut lines = Vec::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            lines.extend([name, "1", "1"]);
        }
        let mut r = runner(&lines);
        let features = r.ask_features().unwrap();
        assert_eq!(features.len(), MAX_FEATURES);
        assert_eq!(features[4].name, "e");
        let out = r.into_inner().output;
        assert!(out.contains(&"Maximum 5 core features recommended.".to_string()));
    }

    #[test]
    fn features_default_when_none_entered() {
        let mut r = runner(&[""]);
        assert_eq!(r.ask_features().unwrap(), vec![FeatureAnswer::placeholder()]);
    }

    #[test]
    fn full_questionnaire_in_order() {
        let mut r = runner(&[
            "Foo",     // name
            "5",       // type: api
            "6",       // domain: finance
            "d",       // description
            "devs",    // users
            "3",       // expert
            "2",       // weekly
            "",        // devices
            "Sync",    // feature 1
            "1",       // critical
            "3",       // complex
            "",        // done
            "y",       // auth
            "n",       // realtime
            "",        // offline
            "",        // integrations
            "",        // business logic
            "",        // workflows
            "",        // priorities
        ]);
        let answers = r.collect(SetupProfile::Full).unwrap();

        assert_eq!(answers.name, "Foo");
        assert_eq!(answers.project_type, ProjectType::Api);
        assert_eq!(answers.domain, Domain::Finance);
        assert_eq!(answers.technical_level, TechnicalLevel::Expert);
        assert_eq!(answers.usage_frequency, UsageFrequency::Weekly);
        assert!(answers.devices.is_empty());
        assert_eq!(
            answers.core_features,
            vec![FeatureAnswer::new("Sync", Priority::Critical, Complexity::Complex)]
        );
        assert!(answers.needs_auth);
        assert!(!answers.needs_realtime);
        assert!(!answers.needs_offline);
        assert!(answers.integrations.is_empty());
    }

    #[test]
    fn quick_questionnaire_applies_defaults() {
        let mut r = runner(&["", "4", "", "", ""]);
        let answers = r.collect(SetupProfile::Quick).unwrap();
        assert_eq!(answers.name, "My Project");
        assert_eq!(answers.project_type, ProjectType::Game);
        assert_eq!(answers.domain, Domain::Entertainment);
        assert_eq!(answers.primary_users, "General users");
    }

    #[test]
    fn quick_type_falls_back_silently() {
        let mut r = runner(&["X", "7", "", "", ""]);
        let answers = r.collect(SetupProfile::Quick).unwrap();
        assert_eq!(answers.project_type, ProjectType::WebApp);
        let out = r.into_inner().output;
        assert!(!out.contains(&"Invalid choice, using first option.".to_string()));
        assert!(out.contains(&"  1. Web App (React/Vue/etc)".to_string()));
    }

    #[test]
    fn exhausted_input_degrades_to_defaults() {
        let mut r = runner(&[]);
        let answers = r.collect(SetupProfile::Full).unwrap();
        assert_eq!(answers.project_type, ProjectType::WebApp);
        assert_eq!(answers.core_features, vec![FeatureAnswer::placeholder()]);
        assert!(!answers.needs_auth);
    }
}
