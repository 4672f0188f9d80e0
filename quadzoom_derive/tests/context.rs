use anyhow::{Result, bail};
use quadzoom_derive::context;

#[context("parsing level '{text}'")]
fn parse_level(text: &str) -> Result<u8> {
	let level: u8 = text.parse()?;
	if level > 31 {
		bail!("level {level} is deeper than 31");
	}
	Ok(level)
}

#[context("checking level {level}")]
async fn has_imagery(level: u8) -> Result<bool> {
	if level == 0 {
		bail!("no tiles left to check");
	}
	Ok(level > 10)
}

#[context("looking up '{}' in {} entries", key, entries.len())]
fn lookup<'a>(entries: &'a [(&'a str, u8)], key: &str) -> Result<&'a u8> {
	for (name, level) in entries {
		if *name == key {
			return Ok(level);
		}
	}
	bail!("unknown key")
}

fn messages(err: &anyhow::Error) -> Vec<String> {
	err.chain().map(ToString::to_string).collect()
}

#[test]
fn sync_ok_passes_through() {
	assert_eq!(parse_level("14").unwrap(), 14);
}

#[test]
fn sync_error_gets_context() {
	let err = parse_level("40").unwrap_err();
	assert_eq!(
		messages(&err),
		vec!["parsing level '40'".to_string(), "level 40 is deeper than 31".to_string()]
	);
}

#[tokio::test]
async fn async_error_gets_context() {
	assert!(has_imagery(12).await.unwrap());
	let err = has_imagery(0).await.unwrap_err();
	assert_eq!(
		messages(&err),
		vec!["checking level 0".to_string(), "no tiles left to check".to_string()]
	);
}

#[test]
fn early_return_and_borrowed_output() {
	let entries = [("berlin", 14), ("seattle", 12)];
	assert_eq!(lookup(&entries, "seattle").unwrap(), &12);
	let err = lookup(&entries, "paris").unwrap_err();
	assert_eq!(
		messages(&err),
		vec!["looking up 'paris' in 2 entries".to_string(), "unknown key".to_string()]
	);
}
