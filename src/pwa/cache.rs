//! Offline cache for the service worker: the precached resources and the
//! generated `sw.js` that serves them.
//!
//! The worker installs by caching every resource under [`CACHE_NAME`],
//! deletes every other cache on activation, and answers fetches from the
//! cache first, then the network, and finally the cached root document for
//! failed navigations.

use super::join_base;

pub const CACHE_NAME: &str = "untime-v1";

/// Path segment the app is published under in production.
pub const DEPLOY_SEGMENT: &str = "/untime";

const STATIC_RESOURCES: [&str; 5] = [
    "/",
    "/manifest.json",
    "/favicon.svg",
    "/icon-192x192.png",
    "/icon-512x512.png",
];

const WORKER_TEMPLATE: &str = r#"const CACHE_NAME = __CACHE_NAME__;
const STATIC_RESOURCES = __RESOURCES__;
const ROOT_DOCUMENT = __ROOT__;

self.addEventListener('install', event => {
  event.waitUntil(
    caches.open(CACHE_NAME)
      .then(cache => cache.addAll(STATIC_RESOURCES))
      .then(() => self.skipWaiting())
  );
});

self.addEventListener('activate', event => {
  event.waitUntil(
    caches.keys()
      .then(names => Promise.all(
        names.filter(name => name !== CACHE_NAME).map(name => caches.delete(name))
      ))
      .then(() => self.clients.claim())
  );
});

self.addEventListener('fetch', event => {
  event.respondWith(
    caches.match(event.request)
      .then(hit => hit || fetch(event.request))
      .catch(() => {
        if (event.request.destination === 'document') {
          return caches.match(ROOT_DOCUMENT);
        }
      })
  );
});
"#;

#[derive(Clone, Debug, PartialEq)]
pub struct Precache {
    pub cache_name: String,
    pub resources: Vec<String>,
}

impl Precache {
    pub fn for_base(base: &str) -> Self {
        Self {
            cache_name: CACHE_NAME.to_string(),
            resources: STATIC_RESOURCES
                .iter()
                .map(|path| join_base(base, path))
                .collect(),
        }
    }

    /// Document served for navigations when both cache and network miss.
    pub fn root_document(&self) -> &str {
        self.resources.first().map(String::as_str).unwrap_or("/")
    }

    /// Source of the service worker script for this deployment.
    pub fn service_worker_js(&self) -> Result<String, serde_json::Error> {
        Ok(WORKER_TEMPLATE
            .replace("__CACHE_NAME__", &serde_json::to_string(&self.cache_name)?)
            .replace("__RESOURCES__", &serde_json::to_string(&self.resources)?)
            .replace("__ROOT__", &serde_json::to_string(self.root_document())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precache_prefixes_base() {
        let p = Precache::for_base("/untime");
        assert_eq!(p.cache_name, "untime-v1");
        assert_eq!(p.resources[0], "/untime/");
        assert_eq!(p.resources[1], "/untime/manifest.json");
        assert_eq!(p.resources.len(), 5);
        assert_eq!(p.root_document(), "/untime/");
        assert_eq!(Precache::for_base("").root_document(), "/");
    }

    #[test]
    fn worker_embeds_cache_name_and_resources() {
        let js = Precache::for_base("/untime").service_worker_js().unwrap();
        assert!(js.starts_with("const CACHE_NAME = \"untime-v1\";"));
        assert!(js.contains(
            r#"const STATIC_RESOURCES = ["/untime/","/untime/manifest.json","/untime/favicon.svg","/untime/icon-192x192.png","/untime/icon-512x512.png"];"#
        ));
        assert!(js.contains(r#"const ROOT_DOCUMENT = "/untime/";"#));
        assert!(!js.contains("__"));
    }

    #[test]
    fn worker_keeps_only_current_cache_on_activate() {
        let js = Precache::for_base("").service_worker_js().unwrap();
        assert!(js.contains("addEventListener('activate'"));
        assert!(js.contains("name !== CACHE_NAME"));
        assert!(js.contains("caches.delete(name)"));
    }

    #[test]
    fn worker_falls_back_cache_then_network_then_root() {
        let js = Precache::for_base("").service_worker_js().unwrap();
        assert!(js.contains("hit || fetch(event.request)"));
        assert!(js.contains("destination === 'document'"));
        assert!(js.contains("caches.match(ROOT_DOCUMENT)"));
    }
}
