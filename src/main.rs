use std::{
    borrow::Cow,
    env,
    ffi::OsString,
    fmt,
    fs::OpenOptions,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use fat12_qformat::{Action, FloppyImage, FormatError};

const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Everything that can make a run fail once the arguments have been accepted
#[derive(Debug)]
enum CliError {
    Open { path: PathBuf, source: io::Error },
    Format(FormatError<io::Error>),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Open { path, source } => {
                write!(f, "Cannot open {}: {}", path.display(), source)
            }
            CliError::Format(e) => write!(f, "{}", e),
        }
    }
}

impl From<FormatError<io::Error>> for CliError {
    #[inline]
    fn from(value: FormatError<io::Error>) -> Self {
        CliError::Format(value)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().collect();
    let [_, path] = args.as_slice() else {
        let program = args
            .first()
            .map_or(Cow::Borrowed(PROGRAM_NAME), |p| p.to_string_lossy());
        println!("Usage: {} <floppy_image>", program);
        return ExitCode::FAILURE;
    };

    match run(Path::new(path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<(), CliError> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o644);

    let file = options.open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let (image, action) = FloppyImage::open_or_create(file)?;
    match action {
        Action::Created => log::info!("created a new floppy image at {}", path.display()),
        Action::QuickFormatted(sectors) => log::info!(
            "quick-formatted {} (sectors {} through {})",
            path.display(),
            sectors.start(),
            sectors.end()
        ),
    }

    print!("{}", image.boot_record().summary());

    Ok(())
}
