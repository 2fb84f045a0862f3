use crate::filter::ALL_NETWORKS;
use crate::map::popup::escape;

const NETWORK_OPTIONS_PLACEHOLDER: &str = "{{NETWORK_OPTIONS}}";

pub fn render_index(networks: &[String]) -> String {
    INDEX_HTML.replace(NETWORK_OPTIONS_PLACEHOLDER, &network_options(networks))
}

fn network_options(networks: &[String]) -> String {
    std::iter::once(ALL_NETWORKS)
        .chain(networks.iter().map(String::as_str))
        .map(|network| {
            let network = escape(network);
            format!("<option value=\"{network}\">{network}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Food Bank Map</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="" />
  <style>
    html, body { height: 100%; margin: 0; font-family: sans-serif; }
    body { display: flex; flex-direction: column; }
    #controls { display: flex; gap: 0.5rem; padding: 0.5rem; }
    #searchBox { flex: 1; }
    #map { flex: 1; }
  </style>
</head>

<body>
  <div id="controls">
    <input id="searchBox" type="search" placeholder="Search by name, address or postcode" />
    <select id="networkFilter">
        {{NETWORK_OPTIONS}}
    </select>
  </div>
  <div id="map"></div>

  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <script>
    document.addEventListener('DOMContentLoaded', () => {
      const mapContainer = document.getElementById('map');
      const searchBox = document.getElementById('searchBox');
      const networkFilter = document.getElementById('networkFilter');

      function showError(reason) {
        console.error('Error loading food bank data:', reason);
        mapContainer.innerHTML = '<p style="color:red;">Unable to load food bank data.</p>';
      }

      async function requestSession() {
        const response = await fetch('/sessions', { method: 'POST' });
        const body = await response.json();
        return { response, body };
      }

      async function createSession() {
        const { response, body } = await requestSession();
        if (response.status === 503 && body.errorCode === 'loading') {
          setTimeout(() => createSession().catch(showError), 2000);
          return;
        }
        if (!response.ok || body.error) {
          showError(body.reason || body.errorCode);
          return;
        }
        await refreshNetworks();
        start(body);
      }

      async function refreshNetworks() {
        if (networkFilter.options.length > 1) {
          return;
        }
        const response = await fetch('/foodbanks/networks');
        if (!response.ok) {
          return;
        }
        const body = await response.json();
        body.networks.forEach(network => networkFilter.add(new Option(network, network)));
      }

      function start(initial) {
        const view = initial.view;
        const map = L.map('map').setView([view.center.lat, view.center.lng], view.zoom);
        L.tileLayer(view.tileLayer.urlTemplate, {
          attribution: view.tileLayer.attribution
        }).addTo(map);

        let sessionId = null;
        const markers = new Map();

        function loadSession(session) {
          markers.forEach(marker => map.removeLayer(marker));
          markers.clear();
          session.markers.forEach(item => {
            const marker = L.marker([item.lat, item.lng]).bindPopup(item.popup);
            if (item.visible) {
              marker.addTo(map);
            }
            markers.set(item.id, marker);
          });
          sessionId = session.sessionId;
        }

        async function requestFilter() {
          const params = new URLSearchParams({
            search: searchBox.value,
            network: networkFilter.value
          });
          const response = await fetch(`/sessions/${sessionId}/filter?${params}`);
          const diff = await response.json();
          return { response, diff };
        }

        // The server drops the oldest sessions when it has too many open.
        // A dropped session is replaced and the current criteria re-applied.
        async function filterMarkers() {
          let { response, diff } = await requestFilter();
          if (response.status === 404 && diff.errorCode === 'sessionNotFound') {
            const created = await requestSession();
            if (!created.response.ok || created.body.error) {
              console.error('Could not replace the map session:', created.body.errorCode);
              return;
            }
            loadSession(created.body);
            ({ response, diff } = await requestFilter());
          }
          if (!response.ok || diff.error) {
            console.error('Filtering failed:', diff.errorCode);
            return;
          }
          diff.detach.forEach(id => {
            const marker = markers.get(id);
            if (marker && map.hasLayer(marker)) map.removeLayer(marker);
          });
          diff.attach.forEach(id => {
            const marker = markers.get(id);
            if (marker && !map.hasLayer(marker)) marker.addTo(map);
          });
        }

        loadSession(initial);

        // Diffs only make sense applied in the order the server produced them.
        let queue = Promise.resolve();
        const enqueueFilter = () => {
          queue = queue.then(filterMarkers).catch(err => console.error('Filtering failed:', err));
        };
        searchBox.addEventListener('input', enqueueFilter);
        networkFilter.addEventListener('change', enqueueFilter);
      }

      createSession().catch(showError);
    });
  </script>
</body>

</html>
"#;
