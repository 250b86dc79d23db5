use std::process::exit;

use supadata_client::{
    ChannelVideosParams, Client, Config, CrawlRequest, PlaylistVideosParams, Result,
    TranscriptParams, VideoRef,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The API key comes from SUPADATA_API_KEY, or from the first argument.
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(api_key) => Config::new(api_key.as_str()),
        None => match Config::from_env() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}: {}", err, err.details);
                eprintln!("Usage: {} [api_key]", args[0]);
                exit(1);
            }
        },
    };
    let client = Client::new(config);

    let transcript = client
        .youtube()
        .transcript(&TranscriptParams::new(VideoRef::id("dQw4w9WgXcQ")).text(true))?;
    println!("Transcript ({}): {:?}", transcript.lang, transcript.content);

    let video = client.youtube().video("dQw4w9WgXcQ")?;
    println!("Video: {} by {}", video.title, video.channel.name);

    let channel = client.youtube().channel("UC38IQsAvIsxxjztdMZQtwHA")?;
    println!("Channel: {} ({} subscribers)", channel.name, channel.subscriber_count);

    let videos = client
        .youtube()
        .channel_videos(&ChannelVideosParams::new("UC38IQsAvIsxxjztdMZQtwHA").limit(5))?;
    println!("Channel videos: {:?}", videos.video_ids);

    let playlist = client.youtube().playlist("PLFgquLnL59alCl_2TQvOiD5Vgm1h4gsGy")?;
    println!("Playlist: {} ({} videos)", playlist.title, playlist.video_count);

    let playlist_videos = client.youtube().playlist_videos(
        &PlaylistVideosParams::new("PLFgquLnL59alCl_2TQvOiD5Vgm1h4gsGy").limit(5),
    )?;
    println!("Playlist videos: {:?}", playlist_videos.video_ids);

    let page = client.web().scrape("https://supadata.ai")?;
    println!("Scraped {} characters from {}", page.count_characters, page.url);

    let site_map = client.web().map("https://supadata.ai")?;
    println!("Found {} links", site_map.urls.len());

    let crawl = client
        .web()
        .crawl(&CrawlRequest::new("https://supadata.ai").limit(3))?;
    println!("Crawl job started: {}", crawl.job_id);

    let results = client.web().crawl_results(&crawl.job_id)?;
    println!(
        "Crawl {:?}: {} pages",
        results.status,
        results.pages.map(|p| p.len()).unwrap_or_default()
    );

    Ok(())
}
