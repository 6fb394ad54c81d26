pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;
pub mod parallel;
pub mod writer;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                          RANKDEX STRUCT ARCHITECTURE                         │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ──────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────┐ │
│  │                         struct SearchEngine                            │ │
│  │   config: Config                 tokenizer: Box<dyn Tokenizer>         │ │
│  │   stop_words: StopWordFilter     scorer: TfIdfScorer                   │ │
│  │   index: InvertedIndex           pool: Option<rayon::ThreadPool>       │ │
│  └────────────────────────────────────────────────────────────────────────┘ │
└──────────────────────────────────────────────────────────────────────────────┘
                │ owns                                   ▲ &SearchEngine
                ▼                                        │
┌────────────── INDEXING LAYER ──────────────┐  ┌────────── CONSUMERS ──────────┐
│  InvertedIndex                             │  │  RequestHistory<'a>           │
│    word_to_docs: word → (DocId → tf)       │  │    VecDeque<RequestRecord>    │
│    doc_to_words: DocId → (word → tf)       │  │  process_queries[_joined]     │
│    documents:    DocId → DocumentData      │  │    rayon par_iter             │
│    live_ids:     BTreeSet<DocId>           │  │  remove_duplicates (&mut)     │
└────────────────────────────────────────────┘  └───────────────────────────────┘

┌────────────── SEARCH LAYER ────────────────────────────────────────────────────┐
│  QueryParser ──► Query { plus_words, minus_words }                            │
│  sequential: BTreeMap<DocId, f64>                                             │
│  parallel:   ConcurrentMap<DocId, f64>  (Vec<Mutex<BTreeMap>>, key mod N)     │
│  rank(): relevance desc, |Δ| < ε → rating desc, id asc; truncate to top N     │
└───────────────────────────────────────────────────────────────────────────────┘
*/
