//! Console output blocks for extraer

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::fs::ReadError;

fn write_entry_header(output: &mut impl Write, path: &Path) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "--- Contenido de: {} ---", path.display())?;
    writeln!(output)?;
    Ok(())
}

/// Writes one matched file: blank line, header with the traversed path,
/// blank line, then the content verbatim.
pub fn write_file_content(output: &mut impl Write, path: &Path, content: &str) -> Result<()> {
    write_entry_header(output, path)?;
    writeln!(output, "{}", content)?;
    Ok(())
}

/// Writes the block for a file that could not be read: the header stays,
/// the content is replaced by a single diagnostic line.
pub fn write_read_failure(output: &mut impl Write, path: &Path, error: &ReadError) -> Result<()> {
    write_entry_header(output, path)?;
    writeln!(
        output,
        "Error al leer el archivo {}: {}",
        path.display(),
        error
    )?;
    Ok(())
}

/// The "Se ha(n) ignorado ..." clause, quoted and joined Spanish-style.
/// None when nothing was ignored.
fn ignored_clause(ignored_dirs: &[String]) -> Option<String> {
    let quoted: Vec<String> = ignored_dirs.iter().map(|d| format!("'{}'", d)).collect();
    match quoted.as_slice() {
        [] => None,
        [only] => Some(format!("Se ha ignorado {}.", only)),
        [init @ .., last] => Some(format!("Se han ignorado {} y {}.", init.join(", "), last)),
    }
}

/// Writes the fixed closing banner, preceded by a blank line.
pub fn write_completion(output: &mut impl Write, ignored_dirs: &[String]) -> Result<()> {
    writeln!(output)?;
    match ignored_clause(ignored_dirs) {
        Some(clause) => writeln!(
            output,
            "¡Proceso completado! {} Copia y pega el contenido mostrado.",
            clause
        )?,
        None => writeln!(
            output,
            "¡Proceso completado! Copia y pega el contenido mostrado."
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_file_content_block_exact_bytes() {
        let mut output = Vec::new();
        let path = PathBuf::from("./app/App.tsx");

        write_file_content(&mut output, &path, "const a = 1;").unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "\n--- Contenido de: ./app/App.tsx ---\n\nconst a = 1;\n");
    }

    #[test]
    fn test_read_failure_block() {
        let mut output = Vec::new();
        let path = PathBuf::from("./locked.tsx");
        let error = ReadError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denegado"));

        write_read_failure(&mut output, &path, &error).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("--- Contenido de: ./locked.tsx ---"));
        assert!(result.contains("Error al leer el archivo ./locked.tsx: denegado"));
    }

    #[test]
    fn test_completion_banner_default_set_exact_bytes() {
        let mut output = Vec::new();
        let ignored = vec!["node_modules".to_string(), "expo".to_string()];

        write_completion(&mut output, &ignored).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(
            result,
            "\n¡Proceso completado! Se han ignorado 'node_modules' y 'expo'. \
             Copia y pega el contenido mostrado.\n"
        );
    }

    #[test]
    fn test_completion_banner_single_name() {
        let mut output = Vec::new();
        let ignored = vec!["dist".to_string()];

        write_completion(&mut output, &ignored).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("Se ha ignorado 'dist'."));
    }

    #[test]
    fn test_completion_banner_three_names() {
        let mut output = Vec::new();
        let ignored = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        write_completion(&mut output, &ignored).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("Se han ignorado 'a', 'b' y 'c'."));
    }

    #[test]
    fn test_completion_banner_empty_set() {
        let mut output = Vec::new();

        write_completion(&mut output, &[]).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(
            result,
            "\n¡Proceso completado! Copia y pega el contenido mostrado.\n"
        );
    }
}
