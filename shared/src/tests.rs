#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::ballot_flow::{BallotFlow, Effect, Stage, GUEST_NAME};
    use crate::kings::{KINGS, find_king};
    use crate::leaderboard::Leaderboard;
    use crate::models::{StoredBallot, TallySnapshot, VoteRequest, VoteResponse};
    use crate::validation::{parse_vote_body, validate_vote, ValidationError, MAX_NAME_LENGTH};
    use crate::error::ErrorCode;

    fn board(counts: &[(&str, i64)]) -> Leaderboard {
        Leaderboard::from_snapshot(&TallySnapshot::from_counts(counts.iter().copied()))
    }

    fn in_selection(name: &str) -> BallotFlow {
        let mut flow = BallotFlow::default();
        flow.submit_name(name).unwrap();
        flow
    }

    #[test]
    fn test_catalogue() {
        assert_eq!(KINGS.len(), 8);
        assert_eq!(find_king("flame").unwrap().name, "The Flame");
        assert!(find_king("flame").unwrap().is_red);
        assert!(!find_king("mustang").unwrap().is_red);
        assert!(find_king("not-a-real-king").is_none());
        assert_eq!(find_king("voice").unwrap().label(), "King The Voice ♦");
    }

    #[test]
    fn test_name_validation() {
        assert!(matches!(
            validate_vote(&json!({ "kingId": "flame" })),
            Err(ValidationError::MissingName)
        ));
        assert!(matches!(
            validate_vote(&json!({ "name": 42, "kingId": "flame" })),
            Err(ValidationError::MissingName)
        ));
        assert!(matches!(
            validate_vote(&json!({ "name": "  ", "kingId": "flame" })),
            Err(ValidationError::EmptyName)
        ));

        let long_name = "a".repeat(250);
        let ballot = validate_vote(&json!({ "name": long_name, "kingId": "flame" })).unwrap();
        assert_eq!(ballot.name.chars().count(), MAX_NAME_LENGTH);

        let ballot = validate_vote(&json!({ "name": "  Ana ", "kingId": "classic" })).unwrap();
        assert_eq!(ballot.name, "Ana");
        assert_eq!(ballot.king.id, "classic");
    }

    #[test]
    fn test_king_validation() {
        assert!(matches!(
            validate_vote(&json!({ "name": "Ana", "kingId": "not-a-real-king" })),
            Err(ValidationError::InvalidKing)
        ));
        assert!(matches!(
            validate_vote(&json!({ "name": "Ana" })),
            Err(ValidationError::InvalidKing)
        ));
        assert!(matches!(
            validate_vote(&json!({ "name": "Ana", "kingId": 3 })),
            Err(ValidationError::InvalidKing)
        ));
    }

    #[test]
    fn test_name_checked_before_king() {
        assert!(matches!(
            validate_vote(&json!({ "name": " ", "kingId": "nope" })),
            Err(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_unparsable_body() {
        assert!(matches!(parse_vote_body("not json"), Err(ValidationError::MissingName)));
        assert!(matches!(parse_vote_body(""), Err(ValidationError::MissingName)));
        assert!(matches!(parse_vote_body("[1, 2]"), Err(ValidationError::MissingName)));
        assert!(parse_vote_body(r#"{"name":"Ana","kingId":"flame"}"#).is_ok());
    }

    #[test]
    fn test_snapshot_shape() {
        let snapshot = TallySnapshot::from_counts([("flame", 2), ("ghost", 9), ("voice", -1)]);
        assert_eq!(snapshot.counts.len(), 8);
        assert_eq!(snapshot.count("flame"), 2);
        assert_eq!(snapshot.count("voice"), 0);
        assert_eq!(snapshot.count("classic"), 0);
        assert_eq!(snapshot.total, 2);
        assert_eq!(snapshot.total, snapshot.counts.values().sum::<u64>());

        assert_eq!(TallySnapshot::zeroed().total, 0);
        assert!(TallySnapshot::zeroed().counts.values().all(|&v| v == 0));
    }

    #[test]
    fn test_wire_format() {
        let response = VoteResponse::from(TallySnapshot::from_counts([("flame", 2)]));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["ok"], json!(true));
        assert_eq!(value["total"], json!(2));
        assert_eq!(value["counts"]["flame"], json!(2));
        assert_eq!(value["counts"]["golden-boy"], json!(0));

        let request = serde_json::to_value(VoteRequest { name: "Ana".into(), king_id: "flame".into() }).unwrap();
        assert_eq!(request, json!({ "name": "Ana", "kingId": "flame" }));

        let stored: StoredBallot = serde_json::from_str(r#"{"name":"Ana","optionId":"voice"}"#).unwrap();
        assert_eq!(stored.king().unwrap().id, "voice");
        let stored: StoredBallot = serde_json::from_str(r#"{"name":"Ana","kingId":null}"#).unwrap();
        assert!(stored.king().is_none());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::InvalidInput.status_code(), 400);
        assert_eq!(ErrorCode::MethodNotAllowed.status_code(), 405);
        assert_eq!(ErrorCode::StoreUnconfigured.status_code(), 503);
        assert_eq!(ErrorCode::StoreOperationFailed.status_code(), 500);
        assert_eq!(ErrorCode::from_status_code(503), Some(ErrorCode::StoreUnconfigured));
        assert_eq!(ErrorCode::from_status_code(418), None);
    }

    #[test]
    fn test_no_leader_without_votes() {
        let b = board(&[]);
        assert!(b.leading().is_empty());
        assert_eq!(b.total(), 0);
        assert_eq!(b.percent("flame"), 0);
    }

    #[test]
    fn test_leading_ties() {
        let b = board(&[("flame", 3), ("voice", 3), ("classic", 1)]);
        assert_eq!(b.leading(), vec!["flame", "voice"]);

        let b = board(&[("mustang", 1)]);
        assert_eq!(b.leading(), vec!["mustang"]);
    }

    #[test]
    fn test_percent_rounding() {
        let b = board(&[("flame", 1), ("voice", 1), ("classic", 1)]);
        assert_eq!(b.percent("flame"), 33);

        let b = board(&[("flame", 1), ("voice", 7)]);
        assert_eq!(b.percent("flame"), 13);
        assert_eq!(b.percent("voice"), 88);

        let b = board(&[("flame", 1), ("voice", 1)]);
        assert_eq!(b.percent("flame"), 50);
    }

    #[test]
    fn test_eliminated_lowest_four() {
        let b = board(&[
            ("golden-boy", 8), ("classic", 7), ("maverick", 6), ("historian", 5),
            ("flame", 4), ("voice", 3), ("mustang", 2), ("heartbreaker", 1),
        ]);
        let mut eliminated = b.eliminated();
        eliminated.sort();
        assert_eq!(eliminated, vec!["flame", "heartbreaker", "mustang", "voice"]);
    }

    #[test]
    fn test_eliminated_tie_extension() {
        let b = board(&[
            ("golden-boy", 5), ("classic", 4), ("maverick", 2), ("historian", 2),
            ("flame", 1), ("voice", 1), ("mustang", 2), ("heartbreaker", 0),
        ]);
        let eliminated = b.eliminated();
        assert_eq!(eliminated.len(), 6);
        assert!(!eliminated.contains(&"golden-boy"));
        assert!(!eliminated.contains(&"classic"));

        assert_eq!(board(&[]).eliminated().len(), 8);
    }

    #[test]
    fn test_standings_flags() {
        let b = board(&[("flame", 4), ("voice", 1)]);
        let standings = b.standings(true);
        assert_eq!(standings.len(), 8);

        let flame = standings.iter().find(|s| s.king.id == "flame").unwrap();
        assert!(flame.leading && !flame.eliminated);
        assert_eq!(flame.votes_label(), "4 votes (80%)");

        let voice = standings.iter().find(|s| s.king.id == "voice").unwrap();
        assert_eq!(voice.votes_label(), "1 vote (20%)");

        assert!(b.standings(false).iter().all(|s| !s.eliminated));
        assert_eq!(b.standings(true), b.standings(true));
    }

    #[test]
    fn test_flow_starts_fresh() {
        let flow = BallotFlow::resume(None);
        assert_eq!(flow.stage(), Stage::NameEntry);
        assert_eq!(flow.name(), "");
    }

    #[test]
    fn test_flow_resumes_confirmation() {
        let flow = BallotFlow::resume(Some(StoredBallot::with_king("Ana", find_king("flame").unwrap())));
        assert_eq!(flow.stage(), Stage::Confirmation);
        assert_eq!(flow.name(), "Ana");
        assert_eq!(flow.confirmed().unwrap().id, "flame");

        let flow = BallotFlow::resume(Some(StoredBallot {
            name: "Ana".into(),
            king_id: Some("retired-king".into()),
        }));
        assert_eq!(flow.stage(), Stage::NameEntry);
        assert_eq!(flow.name(), "Ana");
    }

    #[test]
    fn test_flow_name_entry() {
        let mut flow = BallotFlow::default();
        assert_eq!(flow.submit_name("   "), None);
        assert_eq!(flow.stage(), Stage::NameEntry);

        assert_eq!(flow.submit_name(" Ana "), Some(Effect::Persist(StoredBallot::named("Ana"))));
        assert_eq!(flow.stage(), Stage::Selection);
        assert!(!flow.can_confirm());
    }

    #[test]
    fn test_flow_toggle_selection() {
        let mut flow = in_selection("Ana");
        assert!(flow.toggle("flame"));
        assert!(flow.is_selected("flame"));
        assert!(flow.can_confirm());

        assert!(flow.toggle("voice"));
        assert!(flow.is_selected("voice"));
        assert!(!flow.is_selected("flame"));

        assert!(flow.toggle("voice"));
        assert!(flow.selected().is_none());
        assert!(!flow.can_confirm());

        assert!(!flow.toggle("not-a-real-king"));
    }

    #[test]
    fn test_flow_confirm_and_succeed() {
        let mut flow = in_selection("Ana");
        flow.toggle("classic");

        let effect = flow.confirm();
        assert_eq!(effect, Some(Effect::Submit(VoteRequest { name: "Ana".into(), king_id: "classic".into() })));
        assert_eq!(flow.stage(), Stage::Submitting);
        assert_eq!(flow.confirm(), None, "confirm must submit exactly once");
        assert!(!flow.toggle("flame"));

        let effect = flow.submission_succeeded();
        assert_eq!(effect, Some(Effect::Persist(StoredBallot::with_king("Ana", find_king("classic").unwrap()))));
        assert_eq!(flow.stage(), Stage::Confirmation);
        assert_eq!(flow.confirmed().unwrap().id, "classic");
    }

    #[test]
    fn test_flow_failure_keeps_selection() {
        let mut flow = in_selection("Ana");
        flow.toggle("flame");
        flow.confirm();
        flow.submission_failed("Failed to record vote");

        assert_eq!(flow.stage(), Stage::Selection);
        assert_eq!(flow.error(), Some("Failed to record vote"));
        assert!(flow.is_selected("flame"));
        assert!(flow.confirmed().is_none());
        assert!(flow.confirm().is_some());
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_flow_change_prediction() {
        let mut flow = BallotFlow::resume(Some(StoredBallot::with_king("Ana", find_king("mustang").unwrap())));
        flow.change_prediction();
        assert_eq!(flow.stage(), Stage::Selection);
        assert!(flow.is_selected("mustang"));

        flow.toggle("voice");
        flow.confirm();
        flow.submission_succeeded();
        assert_eq!(flow.confirmed().unwrap().id, "voice");
    }

    #[test]
    fn test_flow_guest_name() {
        let mut flow = BallotFlow::resume(Some(StoredBallot {
            name: String::new(),
            king_id: Some("flame".into()),
        }));
        flow.change_prediction();
        match flow.confirm() {
            Some(Effect::Submit(request)) => assert_eq!(request.name, GUEST_NAME),
            other => panic!("unexpected effect: {:?}", other),
        }
    }
}
