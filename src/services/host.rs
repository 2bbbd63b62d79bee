//! Platform services backed by the real host

use super::traits::{PlatformError, PlatformServices};
use crate::config::TuiConfig;
use directories::UserDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Print documents get a fresh, unpredictable name in the scratch directory
const PRINT_FILE_PREFIX: &str = "contact-form-";
const PRINT_FILE_SUFFIX: &str = ".html";

/// Saves into the download directory, prints through the system opener and
/// copies through the system clipboard
#[derive(Debug, Clone)]
pub struct HostServices {
    export_dir: Option<PathBuf>,
    print_command: Option<Vec<String>>,
    scratch_dir: PathBuf,
}

impl HostServices {
    pub fn new(export_dir: Option<PathBuf>, print_command: Option<Vec<String>>) -> Self {
        Self {
            export_dir,
            print_command,
            scratch_dir: std::env::temp_dir(),
        }
    }

    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(config.export_dir.clone(), config.print_command.clone())
    }

    #[cfg(test)]
    fn with_scratch_dir(mut self, dir: PathBuf) -> Self {
        self.scratch_dir = dir;
        self
    }

    /// Configured directory, else the user's downloads, else the working directory
    fn export_dir(&self) -> Result<PathBuf, PlatformError> {
        if let Some(dir) = &self.export_dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        {
            return Ok(dir);
        }
        std::env::current_dir().map_err(|_| PlatformError::NoExportDirectory)
    }

    /// Program and leading arguments used to open the print document
    fn print_launcher(&self) -> (String, Vec<String>) {
        match self.print_command.as_deref() {
            Some([program, args @ ..]) if !program.trim().is_empty() => {
                (program.clone(), args.to_vec())
            }
            _ => default_opener(),
        }
    }

    /// Write the print document to a newly created file that outlives this call
    fn write_print_file(&self, html: &str) -> Result<PathBuf, PlatformError> {
        fs::create_dir_all(&self.scratch_dir)?;
        let mut file = tempfile::Builder::new()
            .prefix(PRINT_FILE_PREFIX)
            .suffix(PRINT_FILE_SUFFIX)
            .tempfile_in(&self.scratch_dir)?;
        file.write_all(html.as_bytes())?;
        // The opener reads the file after we return
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

#[cfg(target_os = "macos")]
fn default_opener() -> (String, Vec<String>) {
    ("open".to_string(), Vec::new())
}

#[cfg(target_os = "windows")]
fn default_opener() -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec!["/C".to_string(), "start".to_string(), String::new()],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_opener() -> (String, Vec<String>) {
    ("xdg-open".to_string(), Vec::new())
}

/// Pick `name`, or `stem (n).ext` when it is already taken
fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| dir.join(format!("{stem} ({n}){extension}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

impl PlatformServices for HostServices {
    fn save_document(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PlatformError> {
        let dir = self.export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = unique_path(&dir, file_name);
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), size = bytes.len(), "document saved");
        Ok(path)
    }

    fn print_document(&self, title: &str, html: &str) -> Result<(), PlatformError> {
        let path = self.write_print_file(html)?;

        let (program, args) = self.print_launcher();
        Command::new(&program)
            .args(&args)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlatformError::Launch {
                program: program.clone(),
                source,
            })?;

        tracing::info!(title, program = %program, path = %path.display(), "print document opened");
        Ok(())
    }

    fn copy_text(&self, text: &str) -> Result<(), PlatformError> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new().map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod save_document {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_writes_into_configured_dir() {
            let dir = tempfile::tempdir().unwrap();
            let services = HostServices::new(Some(dir.path().to_path_buf()), None);

            let path = services.save_document("summary.pdf", b"%PDF-1.4").unwrap();

            assert_eq!(path, dir.path().join("summary.pdf"));
            assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");
        }

        #[test]
        fn test_does_not_overwrite_existing_file() {
            let dir = tempfile::tempdir().unwrap();
            let services = HostServices::new(Some(dir.path().to_path_buf()), None);

            services.save_document("summary.pdf", b"first").unwrap();
            let second = services.save_document("summary.pdf", b"second").unwrap();
            let third = services.save_document("summary.pdf", b"third").unwrap();

            assert_eq!(second, dir.path().join("summary (1).pdf"));
            assert_eq!(third, dir.path().join("summary (2).pdf"));
            assert_eq!(fs::read(dir.path().join("summary.pdf")).unwrap(), b"first");
        }

        #[test]
        fn test_creates_missing_directory() {
            let dir = tempfile::tempdir().unwrap();
            let nested = dir.path().join("exports").join("contact");
            let services = HostServices::new(Some(nested.clone()), None);

            let path = services.save_document("a.pdf", b"x").unwrap();
            assert!(path.starts_with(&nested));
        }
    }

    mod unique_path {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_without_extension() {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("notes"), "").unwrap();
            assert_eq!(
                unique_path(dir.path(), "notes"),
                dir.path().join("notes (1)")
            );
        }
    }

    mod print_document {
        use super::*;
        use pretty_assertions::assert_eq;

        fn argv(parts: &[&str]) -> Option<Vec<String>> {
            Some(parts.iter().map(|part| part.to_string()).collect())
        }

        /// Print documents written into `dir`
        fn print_files(dir: &Path) -> Vec<PathBuf> {
            fs::read_dir(dir)
                .unwrap()
                .map(|entry| entry.unwrap().path())
                .filter(|path| {
                    let name = path.file_name().unwrap().to_string_lossy();
                    name.starts_with(PRINT_FILE_PREFIX) && name.ends_with(PRINT_FILE_SUFFIX)
                })
                .collect()
        }

        #[test]
        fn test_missing_program_is_launch_error() {
            let scratch = tempfile::tempdir().unwrap();
            let services = HostServices::new(None, argv(&["definitely-not-a-real-opener-7f3a"]))
                .with_scratch_dir(scratch.path().to_path_buf());

            let result = services.print_document("Title", "<html></html>");

            assert!(matches!(result, Err(PlatformError::Launch { .. })));
            // The document is still written before launching
            assert_eq!(print_files(scratch.path()).len(), 1);
        }

        #[cfg(unix)]
        #[test]
        fn test_custom_command_receives_document() {
            let scratch = tempfile::tempdir().unwrap();
            let services = HostServices::new(None, argv(&["true", "--ignored"]))
                .with_scratch_dir(scratch.path().to_path_buf());

            services
                .print_document("Title", "<html><body>hi</body></html>")
                .unwrap();

            let files = print_files(scratch.path());
            assert_eq!(files.len(), 1);
            let written = fs::read_to_string(&files[0]).unwrap();
            assert_eq!(written, "<html><body>hi</body></html>");
        }

        #[cfg(unix)]
        #[test]
        fn test_each_print_uses_a_new_file() {
            let scratch = tempfile::tempdir().unwrap();
            let services = HostServices::new(None, argv(&["true"]))
                .with_scratch_dir(scratch.path().to_path_buf());

            services.print_document("Title", "<p>one</p>").unwrap();
            services.print_document("Title", "<p>two</p>").unwrap();

            assert_eq!(print_files(scratch.path()).len(), 2);
        }

        #[cfg(unix)]
        #[test]
        fn test_planted_symlink_is_not_followed() {
            let scratch = tempfile::tempdir().unwrap();
            let outside = tempfile::tempdir().unwrap();
            let victim = outside.path().join("victim.txt");
            fs::write(&victim, "precious").unwrap();
            std::os::unix::fs::symlink(&victim, scratch.path().join("contact-form-print.html"))
                .unwrap();
            let services = HostServices::new(None, argv(&["true"]))
                .with_scratch_dir(scratch.path().to_path_buf());

            services.print_document("Title", "<html>new</html>").unwrap();

            assert_eq!(fs::read_to_string(&victim).unwrap(), "precious");
            let written: Vec<String> = print_files(scratch.path())
                .iter()
                .filter(|path| !path.is_symlink())
                .map(|path| fs::read_to_string(path).unwrap())
                .collect();
            assert_eq!(written, vec!["<html>new</html>".to_string()]);
        }

        #[test]
        fn test_print_launcher_keeps_arguments() {
            let services = HostServices::new(None, argv(&["lp", "-d", "office"]));
            assert_eq!(
                services.print_launcher(),
                ("lp".to_string(), vec!["-d".to_string(), "office".to_string()])
            );
        }

        #[test]
        fn test_program_path_with_spaces() {
            let program = r"C:\Program Files\Viewer\viewer.exe";
            let services = HostServices::new(None, argv(&[program, "/print"]));
            assert_eq!(
                services.print_launcher(),
                (program.to_string(), vec!["/print".to_string()])
            );
        }

        #[test]
        fn test_blank_command_falls_back_to_opener() {
            let services = HostServices::new(None, argv(&["   "]));
            assert_eq!(services.print_launcher(), default_opener());

            let services = HostServices::new(None, Some(Vec::new()));
            assert_eq!(services.print_launcher(), default_opener());
        }
    }
}
