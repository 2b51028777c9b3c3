//! cvforge CLI - resume building, preview, and export tool

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use directories::ProjectDirs;
use indicatif::{ProgressBar, ProgressStyle};

use cvforge::{
    AccentColor, ExportOptions, FileStore, JsonFormat, PdfExporter, Proficiency, ProfileStore,
    RenderOptions, ResumeData, Session, TemplateId,
};

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(version)]
#[command(about = "Build, preview, and export resumes", long_about = None)]
struct Cli {
    /// Profile directory (defaults to the per-user data directory)
    #[arg(long, global = true, value_name = "DIR", env = "CVFORGE_PROFILE")]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a profile seeded with the sample resume
    Init {
        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,
    },

    /// Show a summary of the stored profile
    Info,

    /// Render the resume to HTML
    Html {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Template to render with (stored selection if not specified)
        #[arg(long, value_enum)]
        template: Option<TemplateArg>,

        /// Accent color (stored selection if not specified)
        #[arg(long, value_enum)]
        color: Option<ColorArg>,

        /// Emit the body fragment without the document shell
        #[arg(long)]
        fragment: bool,
    },

    /// Export the resume as a PDF
    Pdf {
        /// Output file (derived from the resume name if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Accent color (stored selection if not specified)
        #[arg(long, value_enum)]
        color: Option<ColorArg>,
    },

    /// Print the resume as JSON
    Json {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show or set the template selection
    Template {
        /// New template (prints the current one if omitted)
        #[arg(value_enum)]
        template: Option<TemplateArg>,
    },

    /// Show or set the accent color
    Color {
        /// New color (prints the current one if omitted)
        #[arg(value_enum)]
        color: Option<ColorArg>,
    },

    /// Add an entry to a resume section
    Add {
        #[command(subcommand)]
        section: AddSection,
    },

    /// Remove an entry from a resume section by id
    Remove {
        #[arg(value_enum)]
        section: Section,

        /// Entry id (shown by `info`)
        id: String,
    },

    /// Mark a work experience entry as the current position
    Current {
        /// Work experience entry id
        id: String,

        /// Clear the current flag instead of setting it
        #[arg(long)]
        off: bool,
    },

    /// Discard all edits and restore the sample resume
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum AddSection {
    /// Add a work experience entry
    Experience {
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        position: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Start date as YYYY-MM
        #[arg(long, default_value = "")]
        start: String,
        /// End date as YYYY-MM (ignored with --current)
        #[arg(long, default_value = "")]
        end: String,
        /// Mark as the current position
        #[arg(long)]
        current: bool,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Add an education entry
    Education {
        #[arg(long, default_value = "")]
        institution: String,
        #[arg(long, default_value = "")]
        degree: String,
        #[arg(long, default_value = "")]
        field: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Start date as YYYY-MM
        #[arg(long, default_value = "")]
        start: String,
        /// End date as YYYY-MM
        #[arg(long, default_value = "")]
        end: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Add a skill
    Skill {
        name: String,

        /// Self-assessment from 1 to 5
        #[arg(long, default_value = "3")]
        level: u8,
    },

    /// Add a language
    Language {
        name: String,

        #[arg(long, value_enum, default_value = "intermediate")]
        proficiency: ProficiencyArg,
    },

    /// Add a certification
    Certification {
        name: String,

        #[arg(long, default_value = "")]
        organization: String,
        /// Date earned as YYYY-MM
        #[arg(long, default_value = "")]
        date: String,
        /// Issuer credential id
        #[arg(long)]
        credential_id: Option<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Section {
    Experience,
    Education,
    Skill,
    Language,
    Certification,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TemplateArg {
    /// Single column with ruled section headings
    Professional,
    /// Gradient sidebar with an initials badge
    Creative,
    /// Centered, typography-first layout
    Minimal,
    /// Banner header with numbered sections
    Modern,
    /// Solid accent sidebar
    Sidebar,
}

impl From<TemplateArg> for TemplateId {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Professional => TemplateId::Professional,
            TemplateArg::Creative => TemplateId::Creative,
            TemplateArg::Minimal => TemplateId::Minimal,
            TemplateArg::Modern => TemplateId::Modern,
            TemplateArg::Sidebar => TemplateId::Sidebar,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Blue,
    Teal,
    Orange,
    Purple,
    Red,
    Green,
}

impl From<ColorArg> for AccentColor {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Blue => AccentColor::Blue,
            ColorArg::Teal => AccentColor::Teal,
            ColorArg::Orange => AccentColor::Orange,
            ColorArg::Purple => AccentColor::Purple,
            ColorArg::Red => AccentColor::Red,
            ColorArg::Green => AccentColor::Green,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ProficiencyArg {
    Basic,
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

impl From<ProficiencyArg> for Proficiency {
    fn from(arg: ProficiencyArg) -> Self {
        match arg {
            ProficiencyArg::Basic => Proficiency::Basic,
            ProficiencyArg::Intermediate => Proficiency::Intermediate,
            ProficiencyArg::Advanced => Proficiency::Advanced,
            ProficiencyArg::Fluent => Proficiency::Fluent,
            ProficiencyArg::Native => Proficiency::Native,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let store = match profile_store(cli.profile) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Init { force } => cmd_init(store, force),
        Commands::Info => cmd_info(store),
        Commands::Html {
            output,
            template,
            color,
            fragment,
        } => cmd_html(store, output, template, color, fragment),
        Commands::Pdf { output, color } => cmd_pdf(store, output, color),
        Commands::Json { output, compact } => cmd_json(store, output, compact),
        Commands::Template { template } => cmd_template(store, template),
        Commands::Color { color } => cmd_color(store, color),
        Commands::Add { section } => cmd_add(store, section),
        Commands::Remove { section, id } => cmd_remove(store, section, &id),
        Commands::Current { id, off } => cmd_current(store, &id, off),
        Commands::Reset { yes } => cmd_reset(store, yes),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn profile_store(dir: Option<PathBuf>) -> Result<FileStore, Box<dyn std::error::Error>> {
    let dir = match dir {
        Some(dir) => dir,
        None => ProjectDirs::from("", "", "cvforge")
            .ok_or("could not determine a profile directory; pass --profile")?
            .data_dir()
            .to_path_buf(),
    };
    Ok(FileStore::new(dir))
}

fn cmd_init(store: FileStore, force: bool) -> CliResult {
    if store.is_initialized() && !force {
        return Err(format!(
            "profile already exists at {} (use --force to overwrite)",
            store.dir().display()
        )
        .into());
    }

    store.save_resume(&ResumeData::sample())?;
    store.save_template(TemplateId::Professional)?;
    store.save_accent(AccentColor::Blue)?;

    println!(
        "{} profile created at {}",
        "Initialized".green().bold(),
        store.dir().display()
    );
    Ok(())
}

fn cmd_info(store: FileStore) -> CliResult {
    let session = Session::open(store);
    let resume = session.resume();

    println!("{}", "Profile".bold());
    print_field("Name", &resume.personal.full_name);
    print_field("Title", &resume.personal.title);
    println!("  {:<14} {}", "Template:".dimmed(), session.template());
    println!("  {:<14} {}", "Accent:".dimmed(), session.accent());
    println!();

    print_section("Experience", resume.work_experience.len());
    for work in &resume.work_experience {
        let range = cvforge::format_range(&work.start_date, &work.end_date, work.current);
        println!(
            "  {} {} at {} ({})",
            work.id.dimmed(),
            work.position,
            work.company,
            range
        );
    }

    print_section("Education", resume.education.len());
    for edu in &resume.education {
        println!("  {} {}, {}", edu.id.dimmed(), edu.degree, edu.institution);
    }

    print_section("Skills", resume.skills.len());
    for skill in &resume.skills {
        println!("  {} {} ({}/5)", skill.id.dimmed(), skill.name, skill.level);
    }

    print_section("Languages", resume.languages.len());
    for language in &resume.languages {
        println!(
            "  {} {} ({})",
            language.id.dimmed(),
            language.name,
            language.proficiency
        );
    }

    print_section("Certifications", resume.certifications.len());
    for cert in &resume.certifications {
        println!("  {} {} - {}", cert.id.dimmed(), cert.name, cert.organization);
    }

    Ok(())
}

fn print_field(label: &str, value: &str) {
    let shown = if value.is_empty() { "(none)" } else { value };
    println!("  {:<14} {}", format!("{}:", label).dimmed(), shown);
}

fn print_section(name: &str, count: usize) {
    println!("{} ({})", name.bold(), count);
}

fn cmd_html(
    store: FileStore,
    output: Option<PathBuf>,
    template: Option<TemplateArg>,
    color: Option<ColorArg>,
    fragment: bool,
) -> CliResult {
    let session = Session::open(store);

    let mut options = RenderOptions::new()
        .with_template(template.map(Into::into).unwrap_or_else(|| session.template()))
        .with_accent(color.map(Into::into).unwrap_or_else(|| session.accent()));
    if fragment {
        options = options.fragment();
    }

    let html = cvforge::render_html(session.resume(), &options)?;

    match output {
        Some(path) => {
            fs::write(&path, html)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn cmd_pdf(store: FileStore, output: Option<PathBuf>, color: Option<ColorArg>) -> CliResult {
    let session = Session::open(store);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Typesetting PDF...");

    let accent = color.map(Into::into).unwrap_or_else(|| session.accent());
    let path = match output {
        Some(path) => path,
        None => PathBuf::from(cvforge::export_filename(
            &session.resume().personal.full_name,
        )),
    };

    let exporter = PdfExporter::new(ExportOptions::new().with_accent(accent));
    exporter.export_to_file(session.resume(), &path)?;

    pb.finish_and_clear();
    println!("{} {}", "Exported".green().bold(), path.display());
    Ok(())
}

fn cmd_json(store: FileStore, output: Option<PathBuf>, compact: bool) -> CliResult {
    let session = Session::open(store);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = cvforge::to_json(session.resume(), format)?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_template(store: FileStore, template: Option<TemplateArg>) -> CliResult {
    let mut session = Session::open(store);
    match template {
        Some(arg) => {
            session.set_template(arg.into());
            println!("{} template set to {}", "OK".green().bold(), session.template());
        }
        None => println!("{}", session.template()),
    }
    Ok(())
}

fn cmd_color(store: FileStore, color: Option<ColorArg>) -> CliResult {
    let mut session = Session::open(store);
    match color {
        Some(arg) => {
            session.set_accent(arg.into());
            println!("{} accent set to {}", "OK".green().bold(), session.accent());
        }
        None => println!("{}", session.accent()),
    }
    Ok(())
}

fn cmd_add(store: FileStore, section: AddSection) -> CliResult {
    let mut session = Session::open(store);

    let id = match section {
        AddSection::Experience {
            company,
            position,
            location,
            start,
            end,
            current,
            description,
        } => session.edit(|resume| {
            let id = resume.add_experience();
            if let Some(work) = resume.experience_mut(&id) {
                work.company = company;
                work.position = position;
                work.location = location;
                work.start_date = start;
                work.end_date = if current { String::new() } else { end };
                work.current = current;
                work.description = description;
            }
            id
        }),
        AddSection::Education {
            institution,
            degree,
            field,
            location,
            start,
            end,
            description,
        } => session.edit(|resume| {
            let id = resume.add_education();
            if let Some(edu) = resume.education_mut(&id) {
                edu.institution = institution;
                edu.degree = degree;
                edu.field = field;
                edu.location = location;
                edu.start_date = start;
                edu.end_date = end;
                edu.description = description;
            }
            id
        }),
        AddSection::Skill { name, level } => session.edit(|resume| resume.add_skill(name, level)),
        AddSection::Language { name, proficiency } => {
            session.edit(|resume| resume.add_language(name, proficiency.into()))
        }
        AddSection::Certification {
            name,
            organization,
            date,
            credential_id,
        } => session.edit(|resume| {
            let id = resume.add_certification();
            if let Some(cert) = resume.certification_mut(&id) {
                cert.name = name;
                cert.organization = organization;
                cert.date = date;
                cert.credential_id = credential_id;
            }
            id
        }),
    };

    println!("{} added entry {}", "OK".green().bold(), id);
    Ok(())
}

fn cmd_remove(store: FileStore, section: Section, id: &str) -> CliResult {
    let mut session = Session::open(store);

    let removed = session.edit(|resume| match section {
        Section::Experience => resume.remove_experience(id),
        Section::Education => resume.remove_education(id),
        Section::Skill => resume.remove_skill(id),
        Section::Language => resume.remove_language(id),
        Section::Certification => resume.remove_certification(id),
    });

    if removed {
        println!("{} removed entry {}", "OK".green().bold(), id);
        Ok(())
    } else {
        Err(format!("no entry with id {}", id).into())
    }
}

fn cmd_current(store: FileStore, id: &str, off: bool) -> CliResult {
    let mut session = Session::open(store);
    let found = session.edit(|resume| resume.set_current_position(id, !off));

    if found {
        let state = if off { "past" } else { "current" };
        println!("{} entry {} marked {}", "OK".green().bold(), id, state);
        Ok(())
    } else {
        Err(format!("no work experience entry with id {}", id).into())
    }
}

fn cmd_reset(store: FileStore, yes: bool) -> CliResult {
    if !yes {
        print!("Discard all edits and restore the sample resume? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut session = Session::open(store);
    session.reset();
    println!("{} restored the sample resume", "OK".green().bold());
    Ok(())
}
