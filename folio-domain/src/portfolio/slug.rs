const SEPARATOR: char = '-';

/// 将标题转换为URL安全的slug
///
/// 小写化，常见拉丁重音字母与西里尔字母转写为ASCII，`@` 转为 `at`，
/// 其余非字母数字字符视为分隔符，连续分隔符合并，首尾分隔符去除。
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        let folded = match ch {
            '@' => Some("at"),
            _ => fold_latin(ch).or_else(|| fold_cyrillic(ch)),
        };

        match folded {
            // 硬音符/软音符不产生字符
            Some("") => {}
            Some(ascii) => {
                push_word(&mut slug, ascii, &mut pending_separator, ch == '@');
            }
            None if ch.is_ascii_alphanumeric() => {
                if pending_separator && !slug.is_empty() {
                    slug.push(SEPARATOR);
                }
                pending_separator = false;
                slug.push(ch);
            }
            None => pending_separator = true,
        }
    }

    slug
}

fn push_word(slug: &mut String, word: &str, pending_separator: &mut bool, standalone: bool) {
    if (*pending_separator || standalone) && !slug.is_empty() {
        slug.push(SEPARATOR);
    }
    slug.push_str(word);
    *pending_separator = standalone;
}

fn fold_latin(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'œ' => "oe",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

fn fold_cyrillic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ґ' => "g",
        'д' => "d",
        'е' | 'э' | 'є' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'ї' => "yi",
        'й' | 'ы' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(folded)
}
