//! Dialogue transcript parsing.

use podcaster_domain::Utterance;

/// Split a `Speaker: text` transcript into ordered utterances.
///
/// Each line is split on its first colon and both halves are trimmed. Blank
/// lines, lines without a colon, and lines with an empty speaker or empty text
/// are skipped. Speaker labels are kept verbatim.
pub fn parse(transcript: &str) -> Vec<Utterance> {
    transcript
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                tracing::debug!(line = line_no + 1, content = line, "skipping malformed line");
            }
            parsed
        })
        .collect()
}

fn parse_line(line: &str) -> Option<Utterance> {
    let (speaker, text) = line.split_once(':')?;
    let (speaker, text) = (speaker.trim(), text.trim());
    if speaker.is_empty() || text.is_empty() {
        return None;
    }
    Some(Utterance::new(speaker, text))
}

/// Join utterances back into transcript form, one `speaker: text` per line.
pub fn render(utterances: &[Utterance]) -> String {
    utterances
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_order_and_trims() {
        let utterances = parse("  Rachel :  Hello there!  \nMike: Hi, Rachel.\n");
        assert_eq!(
            utterances,
            vec![
                Utterance::new("Rachel", "Hello there!"),
                Utterance::new("Mike", "Hi, Rachel."),
            ]
        );
    }

    #[test]
    fn splits_on_first_colon_only() {
        let utterances = parse("Mike: The ratio is 3:2, roughly.");
        assert_eq!(utterances[0].text(), "The ratio is 3:2, roughly.");
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let transcript = "\
Rachel: One

just narration without a colon
Mike:
: orphan text

Mike: Two";
        let utterances = parse(transcript);
        assert_eq!(
            utterances,
            vec![Utterance::new("Rachel", "One"), Utterance::new("Mike", "Two")]
        );
    }

    #[test]
    fn any_label_is_accepted_verbatim() {
        let utterances = parse("NARRATOR: Meanwhile\nrachel: lower\nRACHEL: upper");
        let speakers: Vec<&str> = utterances.iter().map(Utterance::speaker).collect();
        assert_eq!(speakers, vec!["NARRATOR", "rachel", "RACHEL"]);
        assert_eq!(utterances[2].voice_key(), "rachel");
    }

    #[test]
    fn render_reproduces_well_formed_lines() {
        let transcript = "Rachel: Welcome back!\nnoise\n\nMike: Glad to be here.\nRachel: Let's go.";
        let expected: Vec<&str> = transcript
            .lines()
            .filter(|l| l.contains(": "))
            .collect();
        assert_eq!(render(&parse(transcript)), expected.join("\n"));
    }

    #[test]
    fn empty_transcript_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }
}
