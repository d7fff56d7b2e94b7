use lyric_sync::{LrcParser, Script, Tokenizer};

#[test]
fn test_latin_line_is_split_on_whitespace() {
    let track = LrcParser::new().parse_str("[00:01.50]Hello world");

    assert_eq!(track.len(), 1);
    assert_eq!(track[0].script, Script::Latin);
    assert_eq!(track[0].tokens, vec!["Hello", "world"]);
}

#[test]
fn test_chinese_line_is_an_unsplit_block() {
    let track = LrcParser::new().parse_str("[00:02.5]你好世界");

    assert_eq!(track.len(), 1);
    assert_eq!(track[0].time, 2.5);
    assert_eq!(track[0].text, "你好世界");
    assert_eq!(track[0].script, Script::Chinese);
    assert!(track[0].tokens.is_empty());
}

#[test]
fn test_japanese_line_is_segmented_into_words() {
    let track = LrcParser::new().parse_str("[01:00]こんにちは");

    assert_eq!(track.len(), 1);
    assert_eq!(track[0].time, 60.0);
    assert_eq!(track[0].script, Script::Japanese);

    // Токены словоподобны и восстанавливают текст строки
    assert!(!track[0].tokens.is_empty());
    assert_eq!(track[0].tokens.concat(), "こんにちは");
}

#[test]
fn test_kanji_with_kana_is_japanese_not_chinese() {
    let track = LrcParser::new().parse_str("[00:01]日本語を勉強します");

    assert_eq!(track[0].script, Script::Japanese);
    assert!(!track[0].tokens.is_empty());
}

#[test]
fn test_katakana_run_is_a_single_token() {
    let track = LrcParser::new().parse_str("[00:01]テスト");

    assert_eq!(track[0].tokens, vec!["テスト"]);
}

#[test]
fn test_japanese_punctuation_is_not_a_token() {
    let track = LrcParser::new().parse_str("[00:01]こんにちは、世界。");

    assert_eq!(track[0].script, Script::Japanese);
    assert!(!track[0].tokens.iter().any(|t| t == "、" || t == "。"));
    assert_eq!(track[0].tokens.concat(), "こんにちは世界");
}

#[test]
fn test_ideographs_in_japanese_line_split_per_character() {
    let track = LrcParser::new().parse_str("[00:01]漢字とカタカナ");

    // Иероглифы разбиваются посимвольно, последовательность катаканы
    // остаётся единым токеном
    assert_eq!(track[0].script, Script::Japanese);
    assert!(track[0].tokens.contains(&"漢".to_string()));
    assert!(track[0].tokens.contains(&"字".to_string()));
    assert!(track[0].tokens.contains(&"カタカナ".to_string()));
}

#[test]
fn test_cyrillic_falls_under_latin_strategy() {
    // Всё, что не кана и не иероглифы CJK, разбивается по пробелам
    let track = LrcParser::new().parse_str("[00:01]Привет большой мир");

    assert_eq!(track[0].script, Script::Latin);
    assert_eq!(track[0].tokens, vec!["Привет", "большой", "мир"]);
}

#[test]
fn test_tokens_are_never_empty_or_whitespace() {
    let lrc_content = "[00:01]Hello   world\n[00:02]こんにちは 世界\n[00:03]日本語のテスト";

    let track = LrcParser::new().parse_str(lrc_content);

    for line in track.iter() {
        for token in &line.tokens {
            assert!(!token.trim().is_empty(), "пустой токен в '{}'", line.text);
        }
    }
}

#[test]
fn test_tokenizer_direct_use() {
    let tokenizer = Tokenizer::new();

    assert_eq!(
        tokenizer.tokenize("one two", Script::Latin),
        vec!["one", "two"]
    );
    assert!(tokenizer.tokenize("你好", Script::Chinese).is_empty());
    assert_eq!(tokenizer.tokenize("カタカナ", Script::Japanese), vec!["カタカナ"]);
}
