//! 입출력 엔드포인트 모듈
//!
//! 파일 경로, 표준 스트림, 호출자가 넘긴 스트림을 범위가 한정된 바이트 스트림으로 묶습니다.
//! 여기서 연 파일 핸들은 함수가 어떤 경로로 끝나든 반환 전에 닫힙니다.
//! 호출자가 넘긴 스트림은 그대로 쓰고 닫지 않습니다.

use memmap2::Mmap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{CaseConvError, Result};

/// 표준 스트림을 뜻하는 로케이터
pub const STDIO_LOCATOR: &str = "-";

/// 입력 엔드포인트
pub enum InputEndpoint<'a> {
    /// 읽을 파일 경로
    Path(PathBuf),
    /// 프로세스 표준 입력
    Stdin,
    /// 이미 열린 스트림 (소유권은 호출자에게 있음)
    Stream(&'a mut dyn Read),
}

impl InputEndpoint<'_> {
    /// CLI 로케이터 해석 (`-`는 표준 입력)
    pub fn from_locator(locator: &str) -> Self {
        if locator == STDIO_LOCATOR {
            InputEndpoint::Stdin
        } else {
            InputEndpoint::Path(PathBuf::from(locator))
        }
    }

    /// 포맷 추론에 쓸 파일 경로
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputEndpoint::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for InputEndpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEndpoint::Path(path) => write!(f, "{}", path.display()),
            InputEndpoint::Stdin => f.write_str("<stdin>"),
            InputEndpoint::Stream(_) => f.write_str("<stream>"),
        }
    }
}

/// 출력 엔드포인트
pub enum OutputEndpoint<'a> {
    /// 쓸 파일 경로 (없으면 생성, 있으면 덮어쓰기)
    Path(PathBuf),
    /// 프로세스 표준 출력
    Stdout,
    /// 이미 열린 스트림 (소유권은 호출자에게 있음)
    Stream(&'a mut dyn Write),
}

impl OutputEndpoint<'_> {
    /// CLI 로케이터 해석 (`-`는 표준 출력)
    pub fn from_locator(locator: &str) -> Self {
        if locator == STDIO_LOCATOR {
            OutputEndpoint::Stdout
        } else {
            OutputEndpoint::Path(PathBuf::from(locator))
        }
    }

    /// 포맷 추론에 쓸 파일 경로
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputEndpoint::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for OutputEndpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEndpoint::Path(path) => write!(f, "{}", path.display()),
            OutputEndpoint::Stdout => f.write_str("<stdout>"),
            OutputEndpoint::Stream(_) => f.write_str("<stream>"),
        }
    }
}

/// 입력 엔드포인트를 열어 전체 바이트를 `f`에 넘김
///
/// `mmap_threshold` 이상 크기의 파일은 메모리 매핑으로 읽습니다.
/// `f`가 반환되면 파일 핸들과 매핑은 모두 해제됩니다.
///
/// # Arguments
/// * `endpoint` - 입력 엔드포인트
/// * `mmap_threshold` - 메모리 매핑 사용 기준 크기 (바이트)
/// * `f` - 읽은 바이트를 처리할 함수
pub fn with_input<T, F>(endpoint: InputEndpoint<'_>, mmap_threshold: u64, f: F) -> Result<T>
where
    F: FnOnce(&[u8]) -> Result<T>,
{
    match endpoint {
        InputEndpoint::Path(path) => {
            let file = File::open(&path).map_err(|e| CaseConvError::io_at(&path, e))?;
            let file_size = file
                .metadata()
                .map_err(|e| CaseConvError::io_at(&path, e))?
                .len();

            if file_size > 0 && file_size >= mmap_threshold {
                let mmap = read_with_mmap(&file, &path)?;
                f(&mmap[..])
            } else {
                let bytes = read_all(file, file_size as usize)
                    .map_err(|e| CaseConvError::io_at(&path, e))?;
                f(bytes.as_slice())
            }
        }
        InputEndpoint::Stdin => {
            let bytes = read_all(io::stdin().lock(), 0).map_err(|e| CaseConvError::Io {
                target: "<stdin>".to_string(),
                source: e,
            })?;
            f(bytes.as_slice())
        }
        InputEndpoint::Stream(reader) => {
            let bytes = read_all(reader, 0).map_err(|e| CaseConvError::Io {
                target: "<stream>".to_string(),
                source: e,
            })?;
            f(bytes.as_slice())
        }
    }
}

/// 출력 엔드포인트를 열어 writer를 `f`에 넘기고, 끝나면 flush
///
/// 파일은 생성하거나 기존 내용을 비운 뒤 씁니다.
pub fn with_output<T, F>(endpoint: OutputEndpoint<'_>, f: F) -> Result<T>
where
    F: FnOnce(&mut dyn Write) -> io::Result<T>,
{
    match endpoint {
        OutputEndpoint::Path(path) => {
            let file = File::create(&path).map_err(|e| CaseConvError::io_at(&path, e))?;
            let mut writer = BufWriter::new(file);
            write_and_flush(&mut writer, f).map_err(|e| CaseConvError::io_at(&path, e))
        }
        OutputEndpoint::Stdout => {
            let mut stdout = io::stdout().lock();
            write_and_flush(&mut stdout, f).map_err(|e| CaseConvError::Io {
                target: "<stdout>".to_string(),
                source: e,
            })
        }
        OutputEndpoint::Stream(writer) => {
            write_and_flush(writer, f).map_err(|e| CaseConvError::Io {
                target: "<stream>".to_string(),
                source: e,
            })
        }
    }
}

fn write_and_flush<T, F>(writer: &mut dyn Write, f: F) -> io::Result<T>
where
    F: FnOnce(&mut dyn Write) -> io::Result<T>,
{
    let value = f(&mut *writer)?;
    writer.flush()?;
    Ok(value)
}

fn read_all<R: Read>(mut reader: R, size_hint: usize) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(size_hint);
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// 메모리 매핑을 사용한 읽기 (대용량 파일용)
fn read_with_mmap(file: &File, path: &Path) -> Result<Mmap> {
    // 변환이 끝날 때까지 다른 프로세스가 파일을 줄이지 않는다고 가정
    unsafe { Mmap::map(file) }.map_err(|e| CaseConvError::Io {
        target: path.display().to_string(),
        source: io::Error::new(e.kind(), format!("메모리 매핑 실패: {}", e)),
    })
}
