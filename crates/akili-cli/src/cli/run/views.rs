use akili_config::{CourseModule, Curriculum, TrackCurriculum};
use akili_core::unlock;
use akili_model::certificate::Certificate;
use akili_model::profile::LearnerProfile;
use strum::IntoEnumIterator;

pub(crate) fn print_help() {
    println!(
        "Commands:
  /dashboard             your learning overview
  /modules               the curriculum for your track
  /open <n>              read module n
  /quiz <n>              take module n's AI-generated quiz
  /submit-project <n>    hand in a project for module n
  /certificate           view (and print) your certificate
  /settings [key value]  show or change preferences
  /switch-track          discard this profile and pick a new track
  /signout               sign out and wipe local data
  /help                  this list
  /exit                  leave

Anything without a leading / goes to your AI learning assistant."
    );
}

pub(crate) fn print_track_choices(curriculum: &Curriculum) {
    println!("Choose your learning track:\n");
    for (number, (track, _)) in curriculum.tracks().iter().enumerate() {
        println!(
            "  {}. {} {}  ({}) — {}",
            number + 1,
            track.icon(),
            track,
            track.age_range(),
            track.focus()
        );
    }
    println!();
}

pub(crate) fn print_dashboard(profile: &LearnerProfile, track: &TrackCurriculum) {
    let first_name = profile.name.split_whitespace().next().unwrap_or(profile.name.as_str());
    println!("\nHello, {first_name}! 👋");
    println!(
        "You have completed {}% of the {} course. Keep it up!\n",
        profile.progress, profile.track
    );
    println!("  Course progress    {}%", profile.progress);
    println!("  Quizzes passed     {}", profile.quizzes_completed);
    println!("  Projects submitted {}", profile.projects_submitted);
    println!("  Attendance         {}%", profile.attendance_rate);

    match unlock::first_incomplete(track.modules(), &profile.completed_modules) {
        Some(index) => {
            let module = &track.modules()[index];
            println!("\nNext milestone: finish module {} — {}", index + 1, module.title);
        }
        None => println!("\nAll modules complete. See /certificate."),
    }
    println!();
}

pub(crate) fn print_modules(profile: &LearnerProfile, track: &TrackCurriculum) {
    println!("\nCurriculum — {} ({}%)\n", profile.track, profile.progress);
    for (index, module) in track.modules().iter().enumerate() {
        let done = profile.has_completed(&module.id);
        let open = unlock::is_unlocked(track.modules(), &profile.completed_modules, index);
        let marker = if done {
            "✅"
        } else if open {
            "▶️ "
        } else {
            "🔒"
        };
        let status = if done {
            "  [PASSED]"
        } else if open {
            ""
        } else {
            "  [locked]"
        };
        println!("  {marker} Module {}: {}{status}", index + 1, module.title);
        println!("      {}", module.description);
    }
    println!(
        "\nWe verify knowledge: pass the AI-generated quiz at the end of each
module to unlock the next chapter and move closer to your certificate.\n"
    );
}

pub(crate) fn print_module(number: usize, module: &CourseModule, profile: &LearnerProfile) {
    println!("\nModule {number}: {}\n", module.title);
    println!("{}\n", module.content);
    if module.has_project {
        println!("This module accepts a project: /submit-project {number}");
    }
    if profile.has_completed(&module.id) {
        println!("You have already passed this module's quiz.\n");
    } else {
        println!("Ready? Take the quiz with /quiz {number}\n");
    }
}

pub(crate) fn print_certificate_locked(profile: &LearnerProfile) {
    println!("\nCertification locked 🔒");
    println!(
        "Complete all modules and pass your assessments to unlock your official
Akili Academy {} certificate.\n",
        profile.track
    );
    println!("  {} {}%\n", progress_bar(profile.progress), profile.progress);
}

pub(crate) fn print_certificate(certificate: &Certificate) {
    let line = "═".repeat(62);
    println!("\n{line}");
    println!("{:^62}", "AKILI ACADEMY UGANDA");
    println!("{:^62}", "CERTIFICATE OF ACHIEVEMENT");
    println!();
    println!("{:^62}", "This is to certify that");
    println!("{:^62}", certificate.name);
    println!();
    println!("{:^62}", "has successfully demonstrated proficiency and mastery in");
    println!("{:^62}", certificate.track.to_string().to_uppercase());
    println!();
    println!("{:^62}", "by completing the Akili Academy AI curriculum");
    println!("{:^62}", "for the East African tech ecosystem.");
    println!();
    println!("{:^62}", "Kampala, Uganda — Akili Academy Academic Board");
    println!("{:^62}", format!("Date issued: {}", certificate.issued_at.format("%-d %B %Y")));
    println!("{:^62}", format!("Verification id: {}", certificate.verification_id));
    println!("{line}\n");
}

pub(crate) fn print_settings(profile: &LearnerProfile) {
    let preferences = &profile.preferences;
    println!("\nSettings");
    println!("  name           {}", profile.name);
    println!("  email          {}", profile.email);
    println!("  bandwidth      {}", if preferences.low_bandwidth { "low" } else { "normal" });
    println!("  language       {}", preferences.assistant_language);
    println!(
        "  notifications  {}",
        if preferences.notifications_enabled { "on" } else { "off" }
    );
    let languages: Vec<String> = akili_model::profile::AssistantLanguage::iter()
        .map(|language| language.to_string())
        .collect();
    println!(
        "\nChange with: /settings bandwidth low|normal, /settings language <{}>,
/settings notifications on|off, /settings name <your name>\n",
        languages.join("|")
    );
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress) * 20 / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(20 - filled))
}
