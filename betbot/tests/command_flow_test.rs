//! Integration tests for the full mention command surface, driven against
//! the in-memory stores exactly as the binary wires them.

use std::sync::Arc;

use betbot::commands::Bot;
use betbot::scores::ScoresClient;
use tracker::projections::{ProjectionStore, PropCategory, PropLine};
use tracker::store::{MemoryParlayStore, MemoryWagerStore};

fn bot() -> Bot {
    Bot::new(
        Arc::new(MemoryWagerStore::new()),
        Arc::new(MemoryParlayStore::new()),
        Arc::new(ProjectionStore::new()),
        // Points at nothing; tests in this file never touch the feeds.
        ScoresClient::with_base("http://127.0.0.1:9"),
    )
}

#[tokio::test]
async fn owes_bet_settles_into_the_ledger() {
    let bot = bot();

    let reply = bot.handle_mention("C1", "U1", "<@betbot> <@U1> owes <@U2> $20").await;
    assert_eq!(reply, "Bet #1 recorded! <@U1> vs <@U2> for $20: debt");

    let reply = bot.handle_mention("C1", "U1", "settle 1 winner <@U2>").await;
    assert_eq!(reply, "Bet #1 settled! <@U2> wins $20 from <@U1>!");

    let reply = bot.handle_mention("C1", "U2", "balance").await;
    assert!(reply.contains("*You are up $20.00*"));
    assert!(reply.contains("<@U1> owes you $20.00"));

    let reply = bot.handle_mention("C1", "U1", "balance").await;
    assert!(reply.contains("*You are down $20.00*"));
    assert!(reply.contains("You owe <@U2> $20.00"));

    let reply = bot.handle_mention("C1", "U2", "myhistory").await;
    assert!(reply.contains("WON $20 vs <@U1>"));
    assert!(reply.contains("*Record: 1W - 0L*"));

    let reply = bot.handle_mention("C1", "U1", "leaderboard").await;
    let u2_pos = reply.find("<@U2>: +$20.00").expect("winner on leaderboard");
    let u1_pos = reply.find("<@U1>: -$20.00").expect("loser on leaderboard");
    assert!(u2_pos < u1_pos);
}

#[tokio::test]
async fn settle_failure_modes_are_distinct_and_mutate_nothing() {
    let bot = bot();
    bot.handle_mention("C1", "U1", "<@U1> vs <@U2> $50 the finals").await;

    let reply = bot.handle_mention("C1", "U1", "settle 99 winner <@U2>").await;
    assert_eq!(reply, "Bet #99 not found!");

    let reply = bot.handle_mention("C1", "U1", "settle 1 winner <@U3>").await;
    assert_eq!(reply, "Winner must be one of the people in the bet!");

    // Still open after the bad attempts.
    let reply = bot.handle_mention("C1", "U1", "list").await;
    assert!(reply.contains("*#1*"));

    bot.handle_mention("C1", "U1", "settle 1 winner <@U2>").await;
    let reply = bot.handle_mention("C1", "U1", "settle 1 winner <@U2>").await;
    assert_eq!(reply, "Bet #1 is already settled!");
    let reply = bot.handle_mention("C1", "U1", "settle 1 winner <@U1>").await;
    assert_eq!(reply, "Bet #1 is already settled!");
}

#[tokio::test]
async fn settle_phrasings_all_work() {
    let bot = bot();
    for _ in 0..4 {
        bot.handle_mention("C1", "U1", "<@U1> vs <@U2> $5 coin flip").await;
    }

    assert!(bot.handle_mention("C1", "U1", "settle 1 <@U1>").await.contains("settled"));
    assert!(bot.handle_mention("C1", "U1", "2 goes to <@U2>").await.contains("settled"));
    assert!(bot.handle_mention("C1", "U1", "<@U1> won bet 3").await.contains("settled"));
    assert!(bot.handle_mention("C1", "U1", "resolve 4 <@U2>").await.contains("settled"));
}

#[tokio::test]
async fn cancel_is_terminal() {
    let bot = bot();
    bot.handle_mention("C1", "U1", "<@U1> vs <@U2> $10 something").await;

    let reply = bot.handle_mention("C1", "U1", "cancel 1").await;
    assert_eq!(reply, "Bet #1 cancelled!");
    let reply = bot.handle_mention("C1", "U1", "cancel 1").await;
    assert_eq!(reply, "Couldn't cancel bet #1 (not found or already resolved)");
    let reply = bot.handle_mention("C1", "U1", "settle 1 winner <@U1>").await;
    assert_eq!(reply, "Bet #1 is already cancelled!");

    // Cancelled wagers never reach the ledger.
    let reply = bot.handle_mention("C1", "U1", "balance").await;
    assert!(reply.contains("*You are even*"));
}

#[tokio::test]
async fn channel_scoping_of_lists() {
    let bot = bot();
    bot.handle_mention("C1", "U1", "<@U1> vs <@U2> $10 first").await;
    bot.handle_mention("C2", "U3", "<@U3> vs <@U4> $10 second").await;

    let here = bot.handle_mention("C1", "U1", "list").await;
    assert!(here.contains("first") && !here.contains("second"));

    let everywhere = bot.handle_mention("C1", "U1", "all").await;
    assert!(everywhere.contains("first") && everywhere.contains("second"));

    let mine = bot.handle_mention("C2", "U4", "mybets").await;
    assert!(mine.contains("second") && !mine.contains("first"));
}

#[tokio::test]
async fn wall_of_shame_requires_enough_games() {
    let bot = bot();
    bot.handle_mention("C1", "U1", "<@U1> vs <@U2> $10 one").await;
    bot.handle_mention("C1", "U1", "settle 1 winner <@U2>").await;

    let reply = bot.handle_mention("C1", "U1", "shame").await;
    assert_eq!(reply, "Not enough bets to determine the wall of shame!");

    bot.handle_mention("C1", "U1", "<@U1> vs <@U2> $10 two").await;
    bot.handle_mention("C1", "U1", "settle 2 winner <@U2>").await;

    let reply = bot.handle_mention("C1", "U1", "shame").await;
    assert!(reply.contains("*Wall of Shame:*"));
    assert!(reply.contains("<@U1>: 0W-2L (0%)"));
}

#[tokio::test]
async fn parlay_lifecycle() {
    let bot = bot();

    let reply = bot
        .handle_mention("C1", "U1", "parlay $20 Lakers ML +150, Over 220.5 1.91")
        .await;
    assert!(reply.contains("*Parlay #1 registered!*"));
    assert!(reply.contains("Stake: $20 → Potential: $95.50"));
    assert!(reply.contains("1. Lakers ML (2.50)"));

    let reply = bot.handle_mention("C1", "U1", "parlays").await;
    assert!(reply.contains("*Parlay #1*"));

    let reply = bot.handle_mention("C1", "U2", "parlay won 1").await;
    assert_eq!(reply, "You can only update your own parlays!");

    let reply = bot.handle_mention("C1", "U1", "parlay won 1").await;
    assert_eq!(reply, "Parlay #1 marked as WON! You won $95.50!");

    let reply = bot.handle_mention("C1", "U1", "parlay lost 1").await;
    assert_eq!(reply, "Parlay #1 is already won!");

    let reply = bot.handle_mention("C1", "U1", "parlays").await;
    assert!(reply.contains("no open parlays"));
}

#[tokio::test]
async fn empty_parlay_never_creates_a_record() {
    let bot = bot();

    let reply = bot.handle_mention("C1", "U1", "parlay").await;
    assert!(reply.contains("Just send me your picks!"));
    let reply = bot.handle_mention("C1", "U1", "parlay $20").await;
    assert!(reply.contains("Just send me your picks!"));

    let reply = bot.handle_mention("C1", "U1", "parlays").await;
    assert!(reply.contains("no open parlays"));
}

#[tokio::test]
async fn slip_upload_becomes_a_screenshot_parlay() {
    let bot = bot();
    let lines: Vec<String> = ["FanDuel Sportsbook", "Celtics ML -150", "Under 45.5", "Cash Out"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let reply = bot.register_slip("C1", "U1", &lines, Some("$10".into()));
    assert!(reply.contains("*Parlay #1 registered!*"));
    assert!(reply.contains("Celtics ML"));
    assert!(reply.contains("Under 45.5"));

    let garbage: Vec<String> = vec!["????".into(), "12".into()];
    let reply = bot.register_slip("C1", "U1", &garbage, None);
    assert!(reply.contains("Couldn't read any picks"));
}

#[tokio::test]
async fn projections_upload_and_props() {
    let bot = bot();

    let reply = bot.handle_mention("C1", "U1", "props").await;
    assert_eq!(reply, "No projections loaded. Upload the CSV first!");

    let csv = "Player,Team,Minutes,PTS,AST,DREB,OREB,STL,BLK\n\
               Nikola Jokic,DEN,34.1,26.5,9.1,9.2,2.9,1.3,0.8\n\
               Luka Doncic,DAL,36.0,32.2,8.8,7.1,1.1,1.4,0.5";
    let reply = bot.load_projections(csv);
    assert!(reply.contains("Parsed 2 players"));

    let reply = bot.handle_mention("C1", "U1", "props").await;
    assert!(reply.contains("*Top Points:*"));
    assert!(reply.contains("Luka Doncic (DAL) - 32.2 PTS"));

    let props = vec![
        PropLine { player: "Luka Doncic".into(), category: PropCategory::Points, line: 27.5 },
        PropLine { player: "Nikola Jokic".into(), category: PropCategory::Assists, line: 9.6 },
    ];
    let reply = bot.props_report(&props);
    assert!(reply.contains("Luka Doncic (DAL) PTS: line 27.5 | proj 32.2 | *OVER (+4.7)*"));
    assert!(reply.contains("Nikola Jokic (DEN) AST: line 9.6 | proj 9.1 | *UNDER (-0.5)*"));

    let reply = bot.load_projections("not,a,projection\nfile,at,all");
    assert!(reply.contains("doesn't look like projections"));
}

#[tokio::test]
async fn nonsense_gets_the_generic_fallback() {
    let bot = bot();
    let reply = bot.handle_mention("C1", "U1", "what's the weather like").await;
    assert_eq!(reply, "I didn't understand that. Try `help` for usage info.");
}
