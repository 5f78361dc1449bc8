//! The two bot operations: feed posting and keyword retweeting.
//!
//! Both are single-pass, fire-and-continue loops: individual post or retweet
//! failures are logged and the run moves on to the next item. Only a failure
//! of the search query itself aborts a run, since without results there is
//! nothing left to do.

use log::{error, info};
use reqwest::Client;

use crate::config::{Settings, TwitterConfig};
use crate::dedup::DedupLog;
use crate::feed::{compose_message, fetch_feed, shorten_text};
use crate::twitter::{build_search_query, post_tweet, retweet, search_tweets};

/// Length to which tweet text is shortened in retweet reports.
const REPORT_TEXT_LENGTH: usize = 40;

/// Reads the configured feed and posts every entry not yet in the posted-URLs
/// log.
///
/// Per entry, in document order: entries whose link is already recorded are
/// reported and skipped; otherwise the tweet message is composed from the
/// truncated title and the link, posted, and the link recorded on success.
/// Provider errors on individual posts are logged and the loop continues. A
/// failed log append is logged but does not undo the post; the record is
/// simply lost and the entry may be posted again on a future run.
///
/// # Parameters
///
/// - `settings`: feed URL, log file path, and truncation length
/// - `config`: Twitter API credentials
///
/// # Returns
///
/// - `Ok(())`: the run completed, including the "feed was empty" case
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: if the feed could not
///   be fetched or parsed
pub async fn read_feed_and_tweet(
    settings: &Settings,
    config: &TwitterConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = Client::new();
    let entries = fetch_feed(&client, &settings.feed_url).await?;

    if entries.is_empty() {
        info!("Nothing found in feed {}", settings.feed_url);
        return Ok(());
    }

    let posted_log = DedupLog::new(&settings.posted_urls_file);

    for entry in &entries {
        if posted_log.contains(&entry.link) {
            info!("Already posted: {}", entry.link);
            continue;
        }

        let message = compose_message(entry, settings.max_title_length);
        match post_tweet(config, &client, &message).await {
            Ok(_) => {
                if let Err(e) = posted_log.record(&entry.link) {
                    error!(
                        "Failed to record {} in {}: {}",
                        entry.link, settings.posted_urls_file, e
                    );
                }
                info!("Posted: {}", entry.link);
            }
            Err(e) => {
                error!("Failed to post {}: {}", entry.link, e);
            }
        }
    }

    Ok(())
}

/// Searches for the configured keywords and retweets every match not yet in
/// the retweets log.
///
/// The query is rebuilt from the include/exclude word lists on every run. A
/// failure of the search call itself aborts the run; failures on individual
/// retweets are logged and the loop continues.
///
/// # Parameters
///
/// - `settings`: keyword lists, result count, and log file path
/// - `config`: Twitter API credentials (including the bot's user id)
///
/// # Returns
///
/// - `Ok(())`: the run completed, including the "no matches" case
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: if the search call failed
pub async fn search_and_retweet(
    settings: &Settings,
    config: &TwitterConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = Client::new();
    let query = build_search_query(
        &settings.retweet_include_words,
        &settings.retweet_exclude_words,
    );

    let tweets = search_tweets(config, &client, &query, settings.search_count).await?;

    let retweeted_log = DedupLog::new(&settings.posted_retweets_file);

    for tweet in &tweets {
        let short_text = shorten_text(&tweet.text, REPORT_TEXT_LENGTH);
        if retweeted_log.contains(&tweet.id) {
            info!("Already retweeted {} (id {})", short_text, tweet.id);
            continue;
        }

        match retweet(config, &client, &tweet.id).await {
            Ok(_) => {
                if let Err(e) = retweeted_log.record(&tweet.id) {
                    error!(
                        "Failed to record {} in {}: {}",
                        tweet.id, settings.posted_retweets_file, e
                    );
                }
                info!("Retweeted {} (id {})", short_text, tweet.id);
            }
            Err(e) => {
                error!("Failed to retweet id {}: {}", tweet.id, e);
            }
        }
    }

    Ok(())
}
