use crate::cli::opt::Run;
use crate::cli::run::prompt::SimplePrompt;
use akili_config::{CourseModule, Curriculum};
use akili_core::assistant::{AssistantResponder, OpenAiAssistantResponder, system_instruction};
use akili_core::chat::Conversation;
use akili_core::generator::OpenAiQuestionGenerator;
use akili_core::llm_config::LlmConfig;
use akili_core::quiz::passing_score;
use akili_core::quiz::session::{Phase, QuizSession};
use akili_core::{certificate, progress, unlock};
use akili_model::profile::{AssistantLanguage, ProjectSubmission, SubmissionStatus};
use akili_model::tab::Tab;
use akili_store::profile::{Mutation, Query};
use akili_store::state::{PersistedState, StateStore};
use akili_utils::loader::FileSystemLoader;
use anyhow::{Error, Result};
use chrono::Utc;
use reedline::{Reedline, Signal};
use std::str::FromStr;

pub(crate) mod prompt;
mod views;

enum Command {
    Exit,
    Help,
    Dashboard,
    Modules,
    Open(usize),
    Quiz(usize),
    SubmitProject(usize),
    Certificate,
    Settings(Option<String>),
    SwitchTrack,
    SignOut,
    Message(String),
}

pub(crate) async fn run(opt: Run) -> Result<(), Error> {
    akili_utils::tracing::setup(
        akili_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .verbose(opt.debug)
            .build(),
    )?;

    let curriculum = match &opt.curriculum {
        Some(dir) => Curriculum::load(&FileSystemLoader::new(dir.clone())).await?,
        None => Curriculum::builtin()?,
    };

    let llm_config = LlmConfig {
        api_key: opt.api_key,
        api_base: opt.api_base,
        model: opt.model,
    };
    let generator = OpenAiQuestionGenerator::new(llm_config.clone());
    let responder = OpenAiAssistantResponder::new(llm_config);

    let store = StateStore::new(&opt.data_dir);
    let mut state = Query::hydrate(&store).await;

    let mut line_editor = Reedline::create();
    let prompt = SimplePrompt;

    if state.user.is_none() {
        select_track(&mut line_editor, &prompt, &store, &mut state, &curriculum).await?;
    }
    let Some(user) = state.user.as_ref() else {
        return Ok(());
    };

    let mut conversation = build_conversation(user.track, &user.preferences.assistant_language, &curriculum)?;

    println!("\nSigned in as {} — {} track.", user.name, user.track);
    views::print_help();

    // Resume the view the learner last had open.
    match state.active_tab {
        Tab::Dashboard | Tab::Progress => views::print_dashboard(user, curriculum.get(user.track)?),
        Tab::Courses => views::print_modules(user, curriculum.get(user.track)?),
        Tab::Settings => views::print_settings(user),
        Tab::Certificates => {
            if certificate::is_certified(user) {
                println!("View your certificate with /certificate.");
            } else {
                views::print_certificate_locked(user);
            }
        }
        Tab::Assistant => {}
    }

    let command_regex = regex::Regex::new(r"^/(\S+)(?:\s+(.*))?$")?;

    loop {
        let sig = line_editor.read_line(&prompt)?;
        let input = match sig {
            Signal::Success(input) => input,
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nAborted!");
                break;
            }
        };
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match command_regex.captures(input) {
            Some(captures) => {
                let command = captures.get(1).expect("missing first arg").as_str();
                let arg = captures.get(2).map(|m| m.as_str().trim());
                match command {
                    "exit" | "quit" => Command::Exit,
                    "help" => Command::Help,
                    "dashboard" => Command::Dashboard,
                    "modules" => Command::Modules,
                    "open" => match module_number(arg) {
                        Some(number) => Command::Open(number),
                        None => {
                            eprintln!("Usage: /open <module number>");
                            continue;
                        }
                    },
                    "quiz" => match module_number(arg) {
                        Some(number) => Command::Quiz(number),
                        None => {
                            eprintln!("Usage: /quiz <module number>");
                            continue;
                        }
                    },
                    "submit-project" => match module_number(arg) {
                        Some(number) => Command::SubmitProject(number),
                        None => {
                            eprintln!("Usage: /submit-project <module number>");
                            continue;
                        }
                    },
                    "certificate" | "certificates" => Command::Certificate,
                    "settings" => Command::Settings(arg.map(str::to_owned)),
                    "switch-track" => Command::SwitchTrack,
                    "signout" => Command::SignOut,
                    _ => {
                        eprintln!("Unknown command {command}; try /help");
                        continue;
                    }
                }
            }
            None => Command::Message(input.to_owned()),
        };

        match command {
            Command::Exit => {
                println!("Your progress is saved locally. Karibu tena!");
                break;
            }
            Command::Help => views::print_help(),
            Command::Dashboard => {
                Mutation::set_active_tab(&store, &mut state, Tab::Dashboard).await;
                if let Some(user) = state.user.as_ref() {
                    views::print_dashboard(user, curriculum.get(user.track)?);
                }
            }
            Command::Modules => {
                Mutation::set_active_tab(&store, &mut state, Tab::Courses).await;
                if let Some(user) = state.user.as_ref() {
                    views::print_modules(user, curriculum.get(user.track)?);
                }
            }
            Command::Open(number) => {
                Mutation::set_active_tab(&store, &mut state, Tab::Courses).await;
                let Some(user) = state.user.as_ref() else { continue };
                let track = curriculum.get(user.track)?;
                match open_module(track.modules(), user, number) {
                    Some(module) => views::print_module(number, module, user),
                    None => continue,
                }
            }
            Command::Quiz(number) => {
                Mutation::set_active_tab(&store, &mut state, Tab::Courses).await;
                let Some(user) = state.user.as_ref() else { continue };
                let track = curriculum.get(user.track)?;
                let Some(module) = open_module(track.modules(), user, number) else {
                    continue;
                };
                let module_id = module.id.clone();
                let outcome = run_quiz(&mut line_editor, &prompt, &generator, module).await?;

                let Some(passed) = outcome else { continue };
                let mut changed = false;
                if let Some(user) = state.user.as_mut() {
                    changed = progress::on_quiz_completed(user, track, &module_id, passed);
                }
                if changed {
                    Mutation::save(&store, &state).await;
                    if let Some(user) = state.user.as_ref() {
                        if certificate::is_certified(user) {
                            println!("🏆 Track complete! View your certificate with /certificate.");
                        } else if let Some(next) = unlock::first_incomplete(track.modules(), &user.completed_modules) {
                            println!("Module {} is now unlocked.", next + 1);
                        }
                    }
                }
            }
            Command::SubmitProject(number) => {
                let Some(user) = state.user.as_ref() else { continue };
                let track = curriculum.get(user.track)?;
                let Some(module) = track.modules().get(number - 1) else {
                    eprintln!("There is no module {number}.");
                    continue;
                };
                if !module.has_project {
                    eprintln!("Module {number} does not take a project submission.");
                    continue;
                }
                if !user.has_completed(&module.id) {
                    eprintln!("Pass the module quiz before submitting its project.");
                    continue;
                }
                let module_id = module.id.clone();
                let Some(title) = ask_line(&mut line_editor, &prompt, "Project title:")? else {
                    continue;
                };
                let Some(content) = ask_line(&mut line_editor, &prompt, "Describe your project:")? else {
                    continue;
                };
                let submission = ProjectSubmission {
                    module_id,
                    title,
                    content,
                    status: SubmissionStatus::Pending,
                    feedback: None,
                    submitted_at: Utc::now(),
                };
                if Mutation::submit_project(&store, &mut state, submission).await {
                    println!("Project submitted for review. Webale!");
                }
            }
            Command::Certificate => {
                Mutation::set_active_tab(&store, &mut state, Tab::Certificates).await;
                let Some(user) = state.user.as_mut() else { continue };
                match certificate::issue_certificate(user) {
                    Some(certificate) => {
                        views::print_certificate(&certificate);
                        println!("Print this view for a paper copy; the layout stands on its own.");
                        // The id may have just been recorded on an older profile.
                        Mutation::save(&store, &state).await;
                    }
                    None => {
                        if let Some(user) = state.user.as_ref() {
                            views::print_certificate_locked(user);
                        }
                    }
                }
            }
            Command::Settings(arg) => {
                Mutation::set_active_tab(&store, &mut state, Tab::Settings).await;
                settings_command(arg.as_deref(), &store, &mut state, &curriculum, &mut conversation).await?;
            }
            Command::SwitchTrack => {
                let confirmed = confirm(
                    &mut line_editor,
                    &prompt,
                    "Switch learning track? This discards your current profile and progress.",
                )?;
                if !confirmed {
                    continue;
                }
                Mutation::sign_out(&store, &mut state).await;
                select_track(&mut line_editor, &prompt, &store, &mut state, &curriculum).await?;
                let Some(user) = state.user.as_ref() else { break };
                conversation = build_conversation(user.track, &user.preferences.assistant_language, &curriculum)?;
                views::print_help();
            }
            Command::SignOut => {
                let confirmed = confirm(
                    &mut line_editor,
                    &prompt,
                    "Sign out? This wipes your locally saved progress for good.",
                )?;
                if !confirmed {
                    continue;
                }
                Mutation::sign_out(&store, &mut state).await;
                println!("Signed out. All local data removed.");
                break;
            }
            Command::Message(text) => {
                if state.active_tab != Tab::Assistant {
                    Mutation::set_active_tab(&store, &mut state, Tab::Assistant).await;
                }
                ask_assistant(&mut conversation, &responder, &text).await;
            }
        }
    }

    Ok(())
}

fn module_number(arg: Option<&str>) -> Option<usize> {
    arg.and_then(|arg| arg.parse::<usize>().ok()).filter(|number| *number >= 1)
}

/// Resolves a 1-based module number, enforcing the unlock rule.
fn open_module<'a>(
    modules: &'a [CourseModule],
    user: &akili_model::profile::LearnerProfile,
    number: usize,
) -> Option<&'a CourseModule> {
    let index = number - 1;
    let Some(module) = modules.get(index) else {
        eprintln!("There is no module {number}.");
        return None;
    };
    if !unlock::is_unlocked(modules, &user.completed_modules, index) {
        eprintln!("Module {number} is locked. Pass module {index}'s quiz first.");
        return None;
    }
    Some(module)
}

async fn select_track(
    line_editor: &mut Reedline,
    prompt: &SimplePrompt,
    store: &StateStore,
    state: &mut PersistedState,
    curriculum: &Curriculum,
) -> Result<(), Error> {
    views::print_track_choices(curriculum);
    loop {
        let Some(input) = ask_line(line_editor, prompt, "Track number ('q' to quit):")? else {
            return Ok(());
        };
        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        let track = input
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| curriculum.tracks().get_index(index))
            .map(|(track, _)| *track);
        let Some(track) = track else {
            eprintln!("Pick one of the listed numbers.");
            continue;
        };
        let Some(name) = ask_line(line_editor, prompt, "Your full name:")? else {
            return Ok(());
        };
        if name.is_empty() {
            eprintln!("A name is needed for your certificate later on.");
            continue;
        }
        let Some(email) = ask_line(line_editor, prompt, "Email address:")? else {
            return Ok(());
        };

        Mutation::create_profile(store, state, name, email, track).await;
        println!("\nWelcome to the {track} track! 🎉");
        return Ok(());
    }
}

async fn run_quiz(
    line_editor: &mut Reedline,
    prompt: &SimplePrompt,
    generator: &OpenAiQuestionGenerator,
    module: &CourseModule,
) -> Result<Option<bool>, Error> {
    println!("\nThe AI is generating your quiz for \"{}\"...", module.title);
    let mut session = QuizSession::start(generator, module).await;

    if session.total_questions() == 0 {
        println!("The quiz could not be generated. Check your connection and try again in a moment.");
        return Ok(session.outcome());
    }

    println!("Answer with the option number; 'c' cancels the attempt.\n");
    loop {
        match session.phase() {
            Phase::Presenting { index } => {
                let Some(question) = session.current_question() else { break };
                println!(
                    "Question {} of {}  (score: {})",
                    index + 1,
                    session.total_questions(),
                    session.score()
                );
                println!("{}", question.question);
                for (option, text) in question.options.iter().enumerate() {
                    println!("  {}. {text}", option + 1);
                }

                let Some(input) = ask_line(line_editor, prompt, "Your answer:")? else {
                    println!("Quiz cancelled; nothing was recorded.");
                    return Ok(None);
                };
                if input.eq_ignore_ascii_case("c") {
                    println!("Quiz cancelled; nothing was recorded.");
                    return Ok(None);
                }
                let selected = input.parse::<usize>().ok().and_then(|number| number.checked_sub(1));
                let Some(selected) = selected else {
                    eprintln!("Enter an option number.");
                    continue;
                };
                match session.answer(selected) {
                    Ok(reveal) => {
                        if let Some(question) = session.current_question() {
                            if reveal.correct {
                                println!("✅ Correct!");
                            } else {
                                println!(
                                    "❌ Not quite. The correct answer was \"{}\".",
                                    question.options[question.correct_answer]
                                );
                            }
                            println!("   {}\n", question.explanation);
                        }
                    }
                    Err(error) => eprintln!("{error}"),
                }
            }
            Phase::Revealed { .. } => {
                let Some(input) = ask_line(line_editor, prompt, "[Enter] for the next question, 'c' to cancel:")?
                else {
                    println!("Quiz cancelled; nothing was recorded.");
                    return Ok(None);
                };
                if input.eq_ignore_ascii_case("c") {
                    println!("Quiz cancelled; nothing was recorded.");
                    return Ok(None);
                }
                session.advance()?;
            }
            Phase::Completed { .. } => break,
        }
    }

    if let Some(passed) = session.outcome() {
        println!("\nYou scored {} of {}.", session.score(), session.total_questions());
        if passed {
            println!("🎉 You passed!");
        } else {
            println!(
                "You need at least {} correct to pass. Reread the module and try again.",
                passing_score(session.total_questions())
            );
        }
    }
    Ok(session.outcome())
}

async fn ask_assistant<R: AssistantResponder>(conversation: &mut Conversation, responder: &R, text: &str) {
    match conversation.ask(responder, text).await {
        Ok(()) => {
            if let Some(reply) = conversation.last_reply() {
                println!("\n{}\n", reply.content);
            }
        }
        Err(error) => eprintln!("{error}"),
    }
}

async fn settings_command(
    arg: Option<&str>,
    store: &StateStore,
    state: &mut PersistedState,
    curriculum: &Curriculum,
    conversation: &mut Conversation,
) -> Result<(), Error> {
    let Some(arg) = arg else {
        if let Some(user) = state.user.as_ref() {
            views::print_settings(user);
        }
        return Ok(());
    };

    let (key, value) = match arg.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim()),
        None => {
            eprintln!("Usage: /settings <key> <value>; see /settings");
            return Ok(());
        }
    };

    let Some(user) = state.user.as_ref() else {
        return Ok(());
    };
    let mut preferences = user.preferences.clone();

    match key {
        "bandwidth" => match value {
            "low" => preferences.low_bandwidth = true,
            "normal" => preferences.low_bandwidth = false,
            _ => {
                eprintln!("Usage: /settings bandwidth low|normal");
                return Ok(());
            }
        },
        "language" => match AssistantLanguage::from_str(value) {
            Ok(language) => preferences.assistant_language = language,
            Err(_) => {
                eprintln!("Unknown language {value}.");
                return Ok(());
            }
        },
        "notifications" => match value {
            "on" => preferences.notifications_enabled = true,
            "off" => preferences.notifications_enabled = false,
            _ => {
                eprintln!("Usage: /settings notifications on|off");
                return Ok(());
            }
        },
        "name" => {
            if let Some(user) = state.user.as_mut() {
                user.name = value.to_owned();
            }
            Mutation::save(store, state).await;
            println!("Name updated.");
            return Ok(());
        }
        _ => {
            eprintln!("Unknown setting {key}; see /settings");
            return Ok(());
        }
    }

    if Mutation::update_preferences(store, state, preferences).await {
        println!("Preference saved.");
        if let Some(user) = state.user.as_ref() {
            let track = curriculum.get(user.track)?;
            conversation.set_persona(system_instruction(&track.persona, user.preferences.assistant_language));
        }
    }
    Ok(())
}

fn build_conversation(
    track: akili_model::track::LearningTrack,
    language: &AssistantLanguage,
    curriculum: &Curriculum,
) -> Result<Conversation, Error> {
    let track_curriculum = curriculum.get(track)?;
    let persona = system_instruction(&track_curriculum.persona, *language);
    Ok(Conversation::new(track, persona))
}

fn confirm(line_editor: &mut Reedline, prompt: &SimplePrompt, question: &str) -> Result<bool, Error> {
    println!("{question} Type 'yes' to confirm.");
    match line_editor.read_line(prompt)? {
        Signal::Success(input) => Ok(input.trim().eq_ignore_ascii_case("yes")),
        Signal::CtrlC | Signal::CtrlD => Ok(false),
    }
}

fn ask_line(line_editor: &mut Reedline, prompt: &SimplePrompt, label: &str) -> Result<Option<String>, Error> {
    println!("{label}");
    match line_editor.read_line(prompt)? {
        Signal::Success(input) => Ok(Some(input.trim().to_owned())),
        Signal::CtrlC | Signal::CtrlD => Ok(None),
    }
}
