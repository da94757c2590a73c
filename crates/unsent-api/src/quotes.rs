use axum::Json;

use unsent_types::api::QuotesResponse;

/// How long the client shows each tagline before cycling to the next.
pub const ROTATE_SECONDS: u64 = 5;

/// Rotating taglines shown above the public feed. The client owns the
/// timer; the list itself never changes.
pub const QUOTES: &[&str] = &[
    "I wish I could tell you how much I miss you.",
    "My heart still aches for the words left unsaid.",
    "Every moment without you feels like a lifetime.",
    "I regret never telling you I loved you.",
    "Our silence was louder than our love.",
    "The memories of you haunt me every day.",
    "I still wonder what could have been.",
    "Your absence leaves a void in my soul.",
    "Every sunset reminds me of our last goodbye.",
    "I carry the weight of all my unspoken words.",
    "I wish I could go back and say everything.",
    "The pain of our parting still lingers.",
    "You were my first love, and my last regret.",
    "I keep replaying our last moments in my mind.",
    "Sometimes I cry for the love we never had.",
    "My heart is still broken from our goodbye.",
    "Every day, I long to hear your voice again.",
    "I never got to say the things I truly felt.",
    "Missing you is a constant ache in my heart.",
    "The words I left unsent still echo inside me.",
    "I wonder if you ever think of me too.",
    "Loving you was beautiful, even if it hurt.",
    "Our love was a memory that still burns.",
    "I regret every moment we spent apart.",
    "You were the chapter I never could finish.",
    "I wish I had one more chance to hold you.",
    "The pain of your loss is etched in my soul.",
    "Every heartbeat reminds me of our lost love.",
    "I never knew love until I lost you.",
    "My soul still sings the song of our love.",
    "I ache for the days when you were mine.",
    "Your absence is the loudest silence.",
    "I carry the scars of our parting.",
    "I wish our story had a happier ending.",
    "Every memory of you is both sweet and painful.",
    "Our last words were never enough.",
    "The ghost of our love haunts my dreams.",
    "I still dream of the love we could have shared.",
    "I long for the embrace that once healed me.",
    "I regret not fighting harder for our love.",
    "My heart is a battlefield of lost words.",
    "I mourn the love that was never fully lived.",
    "The echoes of our past still whisper to me.",
    "I lost a part of me when you left.",
    "The silence after goodbye is deafening.",
    "I still wait for a love that can never return.",
    "Our unspoken words are my greatest sorrow.",
    "I’m haunted by the memories of our unfinished love.",
    "I wish I had the courage to say it all.",
    "Our love remains, a bittersweet ghost in my heart.",
];

/// Cycles forever: any index maps back into the list.
pub fn quote_at(index: usize) -> &'static str {
    QUOTES[index % QUOTES.len()]
}

pub async fn get_quotes() -> Json<QuotesResponse> {
    Json(QuotesResponse {
        quotes: QUOTES,
        rotate_seconds: ROTATE_SECONDS,
    })
}
