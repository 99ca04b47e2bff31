//! Whole-file text reads and writes for the editor buffer.

use std::{fs, path::Path};

use crate::error::EditorError;

pub fn read_text(path: &Path) -> Result<String, EditorError> {
    let bytes = fs::read(path).map_err(|source| EditorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| EditorError::NotText {
        path: path.to_path_buf(),
    })
}

pub fn write_text(path: &Path, text: &str) -> Result<(), EditorError> {
    fs::write(path, text.as_bytes()).map_err(|source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let root = env::temp_dir().join(format!("puzzlescript_editor_{tag}_{suffix}"));
        fs::create_dir_all(&root).expect("temp root");
        root
    }

    #[test]
    fn writes_exact_bytes() {
        let root = temp_root("write");
        let path = root.join("level.txt");
        let text = "title Crate Pusher\r\n\nLEVELS\n#####\n#.P*#\n#####";

        write_text(&path, text).expect("write");
        assert_eq!(fs::read(&path).expect("read back"), text.as_bytes());
        assert_eq!(read_text(&path).expect("read_text"), text);

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn missing_file_is_read_error() {
        let root = temp_root("missing");
        let path = root.join("nope.txt");

        let err = read_text(&path).expect_err("missing file");
        assert!(matches!(err, EditorError::Read { .. }));
        assert_eq!(err.path(), path.as_path());

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn binary_file_is_not_text() {
        let root = temp_root("binary");
        let path = root.join("image.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).expect("seed");

        let err = read_text(&path).expect_err("invalid utf-8");
        assert!(matches!(err, EditorError::NotText { .. }));

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn writing_into_missing_directory_is_write_error() {
        let root = temp_root("nodir");
        let path = root.join("missing").join("level.txt");

        let err = write_text(&path, "x").expect_err("parent missing");
        assert!(matches!(err, EditorError::Write { .. }));
        assert!(err.to_string().contains("could not write"));

        fs::remove_dir_all(root).expect("cleanup");
    }
}
