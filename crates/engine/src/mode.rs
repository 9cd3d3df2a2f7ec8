//! `ls -l` style rendering of `st_mode`.

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Type indicator for the file-type bits of `mode`.
pub fn type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFLNK => 'l',
        S_IFSOCK => 's',
        S_IFREG => '-',
        S_IFBLK => 'b',
        S_IFDIR => 'd',
        S_IFCHR => 'c',
        S_IFIFO => 'p',
        _ => '?',
    }
}

/// Ten-character permission string, e.g. `-rw-r--r--` or `drwxrwxrwt`.
pub fn filemode(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_char(mode));
    push_triplet(&mut out, mode >> 6, mode & S_ISUID != 0, 's');
    push_triplet(&mut out, mode >> 3, mode & S_ISGID != 0, 's');
    push_triplet(&mut out, mode, mode & S_ISVTX != 0, 't');
    out
}

fn push_triplet(out: &mut String, bits: u32, special: bool, special_char: char) {
    out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    let exec = bits & 0o1 != 0;
    out.push(match (special, exec) {
        (true, true) => special_char,
        (true, false) => special_char.to_ascii_uppercase(),
        (false, true) => 'x',
        (false, false) => '-',
    });
}
